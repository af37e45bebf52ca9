//! # goldalloy - 黄金稀释合金用量计算器
//!
//! 计算将高纯度黄金（如 24k/99.50%）稀释到目标纯度（如 22k/91.60%）
//! 需要添加多少铜/银合金。
//!
//! ## 子命令
//! - `calc`    - 单次计算
//! - `example` - 公式与示例
//! - `batch`   - 批量计算 CSV 文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── alloy/     (校验与计算)
//!   │     ├── batch/     (批量处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod alloy;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
