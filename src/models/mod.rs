//! # 数据模型模块
//!
//! 定义计算提交的输入与结果数据模型。
//!
//! ## 依赖关系
//! - 被 `alloy/` 和 `commands/` 使用
//! - 子模块: submission

pub mod submission;

pub use submission::{CalculationInput, CalculationResult, ParsedInput};
