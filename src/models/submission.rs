//! # 计算提交数据模型
//!
//! 一次提交从原始文本到计算结果的三个阶段：
//! `CalculationInput`（原始文本）→ `ParsedInput`（已校验数值）→ `CalculationResult`。
//!
//! ## 依赖关系
//! - 被 `alloy/` 和 `commands/` 使用
//! - 使用 `alloy/validator.rs` 的 ValidationError

use crate::alloy::ValidationError;
use serde::Deserialize;

/// 原始表单输入（每次提交临时创建）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculationInput {
    /// 当前黄金重量（克）
    pub weight: String,

    /// 当前纯度（%）
    pub current_purity: String,

    /// 目标纯度（%）
    pub target_purity: String,

    /// 目标开数，仅作参考显示
    #[serde(default)]
    pub target_karat: Option<String>,
}

impl CalculationInput {
    pub fn new(
        weight: impl Into<String>,
        current_purity: impl Into<String>,
        target_purity: impl Into<String>,
    ) -> Self {
        CalculationInput {
            weight: weight.into(),
            current_purity: current_purity.into(),
            target_purity: target_purity.into(),
            target_karat: None,
        }
    }

    /// 附加目标开数标签
    pub fn with_karat(mut self, karat: impl Into<String>) -> Self {
        self.target_karat = Some(karat.into());
        self
    }
}

/// 已校验的数值输入（均为有限值）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInput {
    /// 当前黄金重量（克）
    pub weight: f64,
    /// 当前纯度（%）
    pub current_purity: f64,
    /// 目标纯度（%）
    pub target_purity: f64,
}

/// 计算结果：合金重量或校验失败原因，二者只居其一
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationResult {
    /// 需添加的合金重量（克）
    Alloy(f64),
    /// 校验失败
    Invalid(ValidationError),
}

impl CalculationResult {
    pub fn alloy_weight(&self) -> Option<f64> {
        match self {
            CalculationResult::Alloy(g) => Some(*g),
            CalculationResult::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            CalculationResult::Alloy(_) => None,
            CalculationResult::Invalid(e) => Some(*e),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CalculationResult::Alloy(_))
    }
}
