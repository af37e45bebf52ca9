//! # 合金计算模块
//!
//! 黄金稀释计算的核心逻辑：输入校验与合金用量公式。
//!
//! ## 子模块
//! - `validator`: 原始文本输入的解析与校验
//! - `calculator`: 稀释公式与组合求值
//! - `format`: 显示层格式化
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/submission.rs`

pub mod calculator;
pub mod format;
pub mod validator;

pub use calculator::{calculate, evaluate, total_weight, FORMULA};
pub use validator::{validate, ValidationError};
