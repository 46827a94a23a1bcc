pub mod greeting;
pub mod sum;
