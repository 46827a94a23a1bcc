pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::GreeterConfig;
pub use core::greeting::{greet, greet_value, Greeter};
pub use core::sum::{calculate_sum, calculate_sum_values};
pub use domain::{model::Operand, ports::Summable};
pub use utils::error::{GreetError, Result};
