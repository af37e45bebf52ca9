//! # calc 命令实现
//!
//! 对一次提交执行校验与计算，并在终端显示结果。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的参数
//! - 使用 `alloy/` 进行校验与计算
//! - 使用 `utils/output.rs`

use crate::alloy::{self, format};
use crate::cli::calc::CalcArgs;
use crate::error::{GoldAlloyError, Result};
use crate::models::{CalculationInput, ParsedInput};
use crate::utils::output;

/// 校验并计算，返回已校验输入与合金重量
///
/// 极端但有限的输入可能使结果溢出，此时返回 `NonFiniteResult`。
pub fn compute(input: &CalculationInput) -> Result<(ParsedInput, f64)> {
    let parsed = alloy::validate(&input.weight, &input.current_purity, &input.target_purity)?;
    let grams = parsed.alloy_weight();

    if !grams.is_finite() || !alloy::total_weight(parsed.weight, grams).is_finite() {
        return Err(GoldAlloyError::NonFiniteResult);
    }

    Ok((parsed, grams))
}

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    let mut input = CalculationInput::new(args.weight, args.current_purity, args.target_purity);
    if let Some(karat) = args.target_karat {
        input = input.with_karat(karat);
    }

    if args.quiet {
        let (_, grams) = compute(&input)?;
        println!("{}", format::format_grams(grams, args.digits));
        return Ok(());
    }

    output::print_header("Alloy Composition Calculator");

    output::print_field("Current weight (g)", &input.weight);
    output::print_field("Current purity (%)", &input.current_purity);
    match format::karat_label(input.target_karat.as_deref()) {
        Some(label) => output::print_field(
            "Target purity (%)",
            &format!("{} ({})", input.target_purity, label),
        ),
        None => output::print_field("Target purity (%)", &input.target_purity),
    }

    let (parsed, grams) = compute(&input)?;

    output::print_result(
        "Alloy to Add:",
        &format!("{} grams", format::format_grams(grams, args.digits)),
    );
    output::print_field(
        "Resulting total weight",
        &format!(
            "{} grams",
            format::format_grams(alloy::total_weight(parsed.weight, grams), args.digits)
        ),
    );
    output::print_field("Formula", alloy::FORMULA);

    Ok(())
}
