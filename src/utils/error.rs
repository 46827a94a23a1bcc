use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GreetError {
    #[error("Invalid argument `{argument}`: expected {expected}, found {found}")]
    InvalidArgument {
        argument: String,
        expected: String,
        found: String,
    },

    #[error("Sum of {a} and {b} overflows the operand type")]
    Overflow { a: String, b: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
}

impl GreetError {
    pub fn invalid_argument(argument: &str, expected: &str, found: &str) -> Self {
        GreetError::InvalidArgument {
            argument: argument.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetError::InvalidArgument { .. } => ErrorCategory::Input,
            GreetError::Overflow { .. } => ErrorCategory::Arithmetic,
            GreetError::ConfigError { .. } | GreetError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::InvalidArgument {
                argument, expected, ..
            } => format!("`{}` must be {}", argument, expected),
            GreetError::Overflow { .. } => "The numbers are too large to add".to_string(),
            GreetError::ConfigError { .. } => "The greeter configuration could not be read".to_string(),
            GreetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Please check `{}`: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
