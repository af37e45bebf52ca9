//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `alloy/`, `models/`, `batch/`, `utils/`
//! - 子模块: calc, example, batch

pub mod batch;
pub mod calc;
pub mod example;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calc(args) => calc::execute(args),
        Commands::Example => example::execute(),
        Commands::Batch(args) => batch::execute(args),
    }
}
