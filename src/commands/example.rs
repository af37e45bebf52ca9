//! # example 命令实现
//!
//! 显示稀释公式和 10 g 99.50 金 → 91.60 (22k) 的示例。
//!
//! ## 依赖关系
//! - 使用 `alloy/calculator.rs`, `alloy/format.rs`
//! - 使用 `utils/output.rs`

use crate::alloy::{self, format};
use crate::error::Result;
use crate::utils::output;

/// 示例：重量（克）
pub const EXAMPLE_WEIGHT: f64 = 10.0;
/// 示例：当前纯度（%）
pub const EXAMPLE_CURRENT_PURITY: f64 = 99.5;
/// 示例：目标纯度（%）
pub const EXAMPLE_TARGET_PURITY: f64 = 91.6;

/// 示例所需合金重量
pub fn example_alloy_weight() -> f64 {
    alloy::calculate(
        EXAMPLE_WEIGHT,
        EXAMPLE_CURRENT_PURITY,
        EXAMPLE_TARGET_PURITY,
    )
}

/// 执行 example 命令
pub fn execute() -> Result<()> {
    output::print_header("Lowering Purity (Most Common)");

    output::print_info("Convert 24k/99.50 gold to 22k/91.60 by adding copper or silver alloy.");
    output::print_field("Formula", alloy::FORMULA);
    output::print_separator();

    output::print_info("Example: 10g of 99.50 gold to 91.60 (22k)");
    output::print_result(
        "Add",
        &format!(
            "{} grams of alloy",
            format::format_grams(example_alloy_weight(), format::DEFAULT_DIGITS)
        ),
    );

    Ok(())
}
