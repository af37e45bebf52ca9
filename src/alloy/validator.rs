//! # 输入校验器
//!
//! 将表单的三个原始文本字段解析为数值，并检查取值约束。
//!
//! ## 校验顺序（遇到第一个失败即返回）
//! 1. 任一字段无法解析为有限实数 → `MissingOrInvalidInput`
//! 2. 重量 ≤ 0 → `NonPositiveWeight`
//! 3. 任一纯度 ≤ 0 → `NonPositivePurity`
//! 4. 当前纯度 ≤ 目标纯度 → `CurrentNotGreaterThanTarget`
//!
//! ## 依赖关系
//! - 被 `alloy/calculator.rs` 的 `evaluate` 调用
//! - 产出 `models/submission.rs` 的 ParsedInput

use crate::models::ParsedInput;
use thiserror::Error;

/// 校验失败原因
///
/// 错误消息会原样显示给用户。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter all values to calculate.")]
    MissingOrInvalidInput,

    #[error("Current weight must be greater than 0.")]
    NonPositiveWeight,

    #[error("Purity values must be greater than 0.")]
    NonPositivePurity,

    #[error("Current purity must be higher than target purity.")]
    CurrentNotGreaterThanTarget,
}

/// 解析单个数值字段
///
/// 去除首尾空白后要求整体是合法的十进制数；`NaN` 和无穷大视为无效。
pub fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// 校验三个原始输入字段
pub fn validate(
    weight: &str,
    current_purity: &str,
    target_purity: &str,
) -> Result<ParsedInput, ValidationError> {
    let (weight, current_purity, target_purity) = match (
        parse_number(weight),
        parse_number(current_purity),
        parse_number(target_purity),
    ) {
        (Some(w), Some(c), Some(t)) => (w, c, t),
        _ => return Err(ValidationError::MissingOrInvalidInput),
    };

    if weight <= 0.0 {
        return Err(ValidationError::NonPositiveWeight);
    }

    if current_purity <= 0.0 || target_purity <= 0.0 {
        return Err(ValidationError::NonPositivePurity);
    }

    // 稀释要求当前纯度严格高于目标纯度
    if current_purity <= target_purity {
        return Err(ValidationError::CurrentNotGreaterThanTarget);
    }

    Ok(ParsedInput {
        weight,
        current_purity,
        target_purity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number(" 99.50 "), Some(99.5));
        assert_eq!(parse_number("1e1"), Some(10.0));
        assert_eq!(parse_number("-5"), Some(-5.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("10g"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-infinity"), None);
    }

    #[test]
    fn test_validate_ok() {
        let parsed = validate("10", "99.50", "91.60").unwrap();
        assert!((parsed.weight - 10.0).abs() < 1e-12);
        assert!((parsed.current_purity - 99.5).abs() < 1e-12);
        assert!((parsed.target_purity - 91.6).abs() < 1e-12);
    }

    #[test]
    fn test_validate_missing_or_invalid() {
        assert_eq!(
            validate("", "99.5", "91.6"),
            Err(ValidationError::MissingOrInvalidInput)
        );
        assert_eq!(
            validate("10", "abc", "91.6"),
            Err(ValidationError::MissingOrInvalidInput)
        );
        assert_eq!(
            validate("10", "99.5", "inf"),
            Err(ValidationError::MissingOrInvalidInput)
        );
        // 解析失败优先于其他检查
        assert_eq!(
            validate("-5", "", "91.6"),
            Err(ValidationError::MissingOrInvalidInput)
        );
    }

    #[test]
    fn test_validate_non_positive_weight() {
        assert_eq!(
            validate("-5", "99.5", "91.6"),
            Err(ValidationError::NonPositiveWeight)
        );
        assert_eq!(
            validate("0", "99.5", "91.6"),
            Err(ValidationError::NonPositiveWeight)
        );
        // 重量检查先于纯度检查
        assert_eq!(
            validate("0", "-1", "91.6"),
            Err(ValidationError::NonPositiveWeight)
        );
        assert_eq!(
            validate("-1", "50", "91.6"),
            Err(ValidationError::NonPositiveWeight)
        );
    }

    #[test]
    fn test_validate_non_positive_purity() {
        assert_eq!(
            validate("10", "0", "91.6"),
            Err(ValidationError::NonPositivePurity)
        );
        assert_eq!(
            validate("10", "99.5", "0"),
            Err(ValidationError::NonPositivePurity)
        );
        assert_eq!(
            validate("10", "99.5", "-91.6"),
            Err(ValidationError::NonPositivePurity)
        );
    }

    #[test]
    fn test_validate_current_not_greater_than_target() {
        assert_eq!(
            validate("10", "91.60", "91.60"),
            Err(ValidationError::CurrentNotGreaterThanTarget)
        );
        assert_eq!(
            validate("10", "75", "91.6"),
            Err(ValidationError::CurrentNotGreaterThanTarget)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingOrInvalidInput.to_string(),
            "Enter all values to calculate."
        );
        assert_eq!(
            ValidationError::NonPositiveWeight.to_string(),
            "Current weight must be greater than 0."
        );
        assert_eq!(
            ValidationError::NonPositivePurity.to_string(),
            "Purity values must be greater than 0."
        );
        assert_eq!(
            ValidationError::CurrentNotGreaterThanTarget.to_string(),
            "Current purity must be higher than target purity."
        );
    }
}
