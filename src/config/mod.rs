pub mod greeter_config;

pub use greeter_config::GreeterConfig;
