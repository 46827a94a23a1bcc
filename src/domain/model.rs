use serde::{Deserialize, Serialize};
use std::fmt;

/// 動態型別加總所接受的數值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Operand {
    /// 讀取 JSON 數字，其他 JSON 型別回傳 `None`
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let serde_json::Value::Number(number) = value else {
            return None;
        };
        if let Some(i) = number.as_i64() {
            Some(Operand::Int(i))
        } else if let Some(u) = number.as_u64() {
            Some(Operand::UInt(u))
        } else {
            number.as_f64().map(Operand::Float)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Operand::Int(i) => i as f64,
            Operand::UInt(u) => u as f64,
            Operand::Float(f) => f,
        }
    }

    pub fn is_integral(&self) -> bool {
        !matches!(self, Operand::Float(_))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{}", i),
            Operand::UInt(u) => write!(f, "{}", u),
            Operand::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Operand::UInt(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

/// JSON 值的型別名稱，用於參數錯誤訊息
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "text",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
