//! # batch 子命令 CLI 定义
//!
//! 批量计算 CSV 文件。每个 CSV 需包含表头
//! `weight,current_purity,target_purity`，可选 `target_karat` 列。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: CSV file or directory containing CSV files
    pub input: PathBuf,

    /// Output directory for the `<name>_alloy.csv` result files
    #[arg(short, long, default_value = "alloy_results")]
    pub output: PathBuf,

    /// Glob pattern for input files (directory mode, e.g., "*.csv,orders_*.txt")
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "GOLDALLOY_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Number of rows to show in the summary table (single file input)
    #[arg(long, default_value_t = 20)]
    pub show: usize,

    /// Number of decimal places to display
    #[arg(long, default_value_t = 3)]
    pub digits: usize,
}
