use crate::domain::model::{json_kind, Operand};
use crate::domain::ports::Summable;
use crate::utils::error::{GreetError, Result};
use serde_json::Value;

/// 加總兩個相同型別的數值
///
/// 整數溢位時回傳 [`GreetError::Overflow`]，浮點數依 IEEE-754 計算，不會失敗
pub fn calculate_sum<T: Summable>(a: T, b: T) -> Result<T> {
    tracing::debug!("calculate_sum: a={}, b={}", a, b);
    a.checked_sum(b).ok_or_else(|| {
        tracing::warn!("calculate_sum overflowed: {} + {}", a, b);
        GreetError::Overflow {
            a: a.to_string(),
            b: b.to_string(),
        }
    })
}

/// 加總兩個動態型別的值
///
/// 兩者都必須是 JSON 數字。整數結果在 `i64` 或 `u64` 範圍內時保持整數，否則以 `f64` 計算
pub fn calculate_sum_values(a: &Value, b: &Value) -> Result<Operand> {
    let lhs = numeric_argument("a", a)?;
    let rhs = numeric_argument("b", b)?;
    Ok(add_operands(lhs, rhs))
}

fn numeric_argument(argument: &str, value: &Value) -> Result<Operand> {
    Operand::from_json(value).ok_or_else(|| {
        let found = json_kind(value);
        tracing::warn!("calculate_sum rejected a {} argument `{}`", found, argument);
        GreetError::invalid_argument(argument, "number", found)
    })
}

fn add_operands(a: Operand, b: Operand) -> Operand {
    tracing::debug!("calculate_sum_values: a={}, b={}", a, b);

    if a.is_integral() && b.is_integral() {
        let sum = widen(a) + widen(b);
        if let Ok(i) = i64::try_from(sum) {
            return Operand::Int(i);
        }
        if let Ok(u) = u64::try_from(sum) {
            return Operand::UInt(u);
        }
    }

    Operand::Float(a.as_f64() + b.as_f64())
}

// i64 與 u64 相加不會超出 i128
fn widen(operand: Operand) -> i128 {
    match operand {
        Operand::Int(i) => i128::from(i),
        Operand::UInt(u) => i128::from(u),
        Operand::Float(_) => 0,
    }
}
