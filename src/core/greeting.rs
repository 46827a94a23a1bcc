use crate::config::GreeterConfig;
use crate::domain::model::json_kind;
use crate::utils::error::{GreetError, Result};
use crate::utils::validation::Validate;
use serde_json::Value;

/// 回傳 `"Hello, {name}!"`
pub fn greet(name: &str) -> String {
    tracing::debug!("greet: name={:?}", name);
    format!("Hello, {}!", name)
}

/// 問候動態型別的值，只接受 JSON 字串，不做任何型別轉換
pub fn greet_value(name: &Value) -> Result<String> {
    match name {
        Value::String(text) => Ok(greet(text)),
        other => {
            let found = json_kind(other);
            tracing::warn!("greet rejected a {} argument", found);
            Err(GreetError::invalid_argument("name", "text", found))
        }
    }
}

/// 問候語範本：可設定的稱呼與結尾標點
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Greeter {
    config: GreeterConfig,
}

impl Greeter {
    pub fn new(config: GreeterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    pub fn greet(&self, name: &str) -> String {
        tracing::debug!(
            "Greeter::greet: salutation={:?}, name={:?}",
            self.config.salutation,
            name
        );
        format!(
            "{}, {}{}",
            self.config.salutation, name, self.config.punctuation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_greet_world() {
        assert_eq!(greet("World"), "Hello, World!");
    }

    #[test]
    fn test_greet_keeps_name_verbatim() {
        assert_eq!(greet(""), "Hello, !");
        assert_eq!(greet("  spaced  "), "Hello,   spaced  !");
        assert_eq!(greet("世界"), "Hello, 世界!");
        assert_eq!(greet("a!b"), "Hello, a!b!");
    }

    #[test]
    fn test_greet_is_pure() {
        let first = greet("Ada");
        let second = greet("Ada");
        assert_eq!(first, second);
    }

    #[test]
    fn test_greet_value_accepts_text() {
        assert_eq!(greet_value(&json!("World")).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_greet_value_rejects_non_text() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!(false), "boolean"),
            (json!(3), "number"),
            (json!(["World"]), "array"),
            (json!({"name": "World"}), "object"),
        ] {
            let err = greet_value(&value).unwrap_err();
            assert_eq!(err, GreetError::invalid_argument("name", "text", kind));
        }
    }

    #[test]
    fn test_default_greeter_matches_greet() {
        let greeter = Greeter::default();
        for name in ["World", "", "Sum is 3"] {
            assert_eq!(greeter.greet(name), greet(name));
        }
    }

    #[test]
    fn test_configured_greeter() {
        let greeter = Greeter::new(GreeterConfig {
            salutation: "Hi".to_string(),
            punctuation: "?".to_string(),
        })
        .unwrap();
        assert_eq!(greeter.greet("Bob"), "Hi, Bob?");
        assert_eq!(greeter.config().salutation, "Hi");
    }

    #[test]
    fn test_greeter_rejects_invalid_config() {
        let result = Greeter::new(GreeterConfig {
            salutation: String::new(),
            punctuation: "!".to_string(),
        });
        assert!(matches!(
            result,
            Err(GreetError::InvalidConfigValueError { .. })
        ));
    }
}
