//! # 合金用量计算器
//!
//! 将高纯度黄金稀释到目标纯度所需添加的合金（铜/银）重量。
//!
//! ## 公式
//! ```text
//! W_alloy = W_current × ((P_current - P_target) / P_target)
//! ```
//! 稀释前后纯金质量不变：`W_current × P_current = (W_current + W_alloy) × P_target`。
//!
//! ## 依赖关系
//! - 被 `commands/calc.rs`, `commands/batch.rs`, `commands/example.rs` 调用
//! - 使用 `alloy/validator.rs` 校验输入
//! - 使用 `models/submission.rs` 的输入输出结构

use crate::alloy::validator;
use crate::models::{CalculationInput, CalculationResult, ParsedInput};

/// 公式文本（用于终端显示）
pub const FORMULA: &str = "W_alloy = W_current × ((P_current - P_target) / P_target)";

/// 计算需添加的合金重量（克）
///
/// 调用方需保证 `weight > 0` 且 `current_purity > target_purity > 0`，
/// 此时结果严格为正。内部不做舍入。
pub fn calculate(weight: f64, current_purity: f64, target_purity: f64) -> f64 {
    weight * ((current_purity - target_purity) / target_purity)
}

/// 稀释后的总重量（克）
pub fn total_weight(weight: f64, alloy_weight: f64) -> f64 {
    weight + alloy_weight
}

impl ParsedInput {
    /// 对已校验的输入应用稀释公式
    pub fn alloy_weight(&self) -> f64 {
        calculate(self.weight, self.current_purity, self.target_purity)
    }
}

/// 校验并计算一次提交
///
/// 任何算术都发生在三个字段全部通过校验之后。
pub fn evaluate(input: &CalculationInput) -> CalculationResult {
    match validator::validate(&input.weight, &input.current_purity, &input.target_purity) {
        Ok(parsed) => CalculationResult::Alloy(parsed.alloy_weight()),
        Err(e) => CalculationResult::Invalid(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloy::ValidationError;

    #[test]
    fn test_calculate_22k_example() {
        // 10 g 的 99.50 金稀释到 91.60 (22k)
        let alloy = calculate(10.0, 99.5, 91.6);
        let expected = 10.0 * (7.9 / 91.6);
        assert!((alloy - expected).abs() < 1e-9);
        assert!((alloy - 0.862445).abs() < 1e-6);
    }

    #[test]
    fn test_calculate_matches_formula() {
        let cases = [
            (1.0, 99.99, 75.0),
            (250.0, 91.6, 58.5),
            (0.001, 100.0, 99.9),
            (31.1035, 99.5, 41.7),
        ];
        for (w, c, t) in cases {
            let alloy = calculate(w, c, t);
            let expected = w * (c - t) / t;
            assert!((alloy - expected).abs() < 1e-9 * expected.max(1.0));
            assert!(alloy > 0.0);
        }
    }

    #[test]
    fn test_gold_content_conserved() {
        let (w, c, t) = (10.0, 99.5, 91.6);
        let alloy = calculate(w, c, t);
        let total = total_weight(w, alloy);
        assert!((w * c - total * t).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_idempotent() {
        let first = calculate(12.5, 99.9, 87.5);
        let second = calculate(12.5, 99.9, 87.5);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_evaluate_success() {
        let input = CalculationInput::new("10", "99.50", "91.60");
        match evaluate(&input) {
            CalculationResult::Alloy(g) => assert!((g - 0.862445).abs() < 1e-6),
            other => panic!("Expected alloy weight, got {:?}", other),
        }
        assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn test_evaluate_failures() {
        let equal = CalculationInput::new("10", "91.60", "91.60");
        assert_eq!(
            evaluate(&equal),
            CalculationResult::Invalid(ValidationError::CurrentNotGreaterThanTarget)
        );

        let negative = CalculationInput::new("-5", "99.5", "91.6");
        assert_eq!(
            evaluate(&negative),
            CalculationResult::Invalid(ValidationError::NonPositiveWeight)
        );

        let empty = CalculationInput::new("10", "", "91.6");
        assert_eq!(
            evaluate(&empty),
            CalculationResult::Invalid(ValidationError::MissingOrInvalidInput)
        );
    }

    #[test]
    fn test_evaluate_ignores_karat() {
        let plain = CalculationInput::new("10", "99.5", "91.6");
        let labelled = CalculationInput::new("10", "99.5", "91.6").with_karat("18");
        assert_eq!(evaluate(&plain), evaluate(&labelled));
    }
}
