//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calc`: 计算单次稀释所需合金重量
//! - `example`: 显示公式与 22k 示例
//! - `batch`: 批量计算 CSV 文件中的多条记录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calc, batch

pub mod batch;
pub mod calc;

use clap::{Parser, Subcommand};

/// goldalloy - 黄金稀释合金用量计算器
#[derive(Parser)]
#[command(name = "goldalloy")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Compute how much copper/silver alloy to add to fine gold to reach a target purity",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the alloy weight for a single batch of gold
    Calc(calc::CalcArgs),

    /// Show the dilution formula and a worked 24k -> 22k example
    Example,

    /// Evaluate every row of one or more CSV files
    Batch(batch::BatchArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_defaults() {
        let cli = Cli::try_parse_from(["goldalloy", "calc"]).unwrap();
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.weight, "10");
                assert_eq!(args.current_purity, "99.50");
                assert_eq!(args.target_purity, "91.60");
                assert_eq!(args.target_karat, None);
                assert_eq!(args.digits, 3);
            }
            _ => panic!("Expected calc command"),
        }
    }

    #[test]
    fn test_calc_accepts_raw_text() {
        // 数值由校验器判断，clap 只接收原始文本
        let cli = Cli::try_parse_from([
            "goldalloy",
            "calc",
            "--weight=-5",
            "--current-purity",
            "abc",
            "--target-purity",
            "",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.weight, "-5");
                assert_eq!(args.current_purity, "abc");
                assert_eq!(args.target_purity, "");
            }
            _ => panic!("Expected calc command"),
        }
    }

    #[test]
    fn test_karat_label_only_when_given() {
        let cli = Cli::try_parse_from(["goldalloy", "calc", "-t", "75"]).unwrap();
        match cli.command {
            Commands::Calc(args) => assert_eq!(args.target_karat, None),
            _ => panic!("Expected calc command"),
        }

        let cli = Cli::try_parse_from(["goldalloy", "calc", "-t", "75", "-k", "18"]).unwrap();
        match cli.command {
            Commands::Calc(args) => assert_eq!(args.target_karat.as_deref(), Some("18")),
            _ => panic!("Expected calc command"),
        }
    }

    #[test]
    fn test_batch_args() {
        let cli = Cli::try_parse_from(["goldalloy", "batch", "orders.csv", "-j", "4"]).unwrap();
        match cli.command {
            Commands::Batch(args) => {
                assert_eq!(args.input.to_str(), Some("orders.csv"));
                assert_eq!(args.jobs, 4);
                assert_eq!(args.pattern, "*.csv");
                assert!(!args.overwrite);
            }
            _ => panic!("Expected batch command"),
        }
    }
}
