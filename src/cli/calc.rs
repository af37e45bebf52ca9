//! # calc 子命令 CLI 定义
//!
//! 单次计算的四个表单字段。数值默认值即 24k (99.50%) → 22k (91.60%) 示例；
//! 开数标签没有默认值，未给出时不显示。
//! 数值字段以原始文本接收，由 `alloy/validator.rs` 决定是否有效。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`

use clap::Args;

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Current weight of gold (grams)
    #[arg(short, long, env = "GOLDALLOY_WEIGHT", default_value = "10", allow_hyphen_values = true)]
    pub weight: String,

    /// Current purity (%)
    #[arg(
        short,
        long,
        env = "GOLDALLOY_CURRENT_PURITY",
        default_value = "99.50",
        allow_hyphen_values = true
    )]
    pub current_purity: String,

    /// Target purity (%)
    #[arg(
        short,
        long,
        env = "GOLDALLOY_TARGET_PURITY",
        default_value = "91.60",
        allow_hyphen_values = true
    )]
    pub target_purity: String,

    /// Target purity in karat, shown as a label only (the calculation uses target purity %)
    #[arg(short = 'k', long, env = "GOLDALLOY_TARGET_KARAT")]
    pub target_karat: Option<String>,

    /// Number of decimal places to display
    #[arg(long, default_value_t = 3)]
    pub digits: usize,

    /// Print only the alloy weight
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
