use crate::utils::error::{GreetError, Result};
use crate::utils::validation::{
    validate_max_chars, validate_no_whitespace, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SALUTATION: &str = "Hello";
pub const DEFAULT_PUNCTUATION: &str = "!";
const MAX_PUNCTUATION_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    pub salutation: String,
    pub punctuation: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            salutation: DEFAULT_SALUTATION.to_string(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl GreeterConfig {
    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| GreetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化為 TOML 字串
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GreetError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl Validate for GreeterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("salutation", &self.salutation)?;
        validate_max_chars("punctuation", &self.punctuation, MAX_PUNCTUATION_CHARS)?;
        validate_no_whitespace("punctuation", &self.punctuation)?;
        Ok(())
    }
}
