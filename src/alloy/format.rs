//! # 结果格式化
//!
//! 计算结果在显示层统一保留固定小数位（默认 3 位）。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用

/// 默认显示小数位
pub const DEFAULT_DIGITS: usize = 3;

/// 格式化克数；非有限值返回空字符串
pub fn format_grams(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{:.*}", digits, value)
}

/// 目标开数标签（仅作参考显示，不参与计算）
pub fn karat_label(karat: Option<&str>) -> Option<String> {
    let karat = karat.map(str::trim).filter(|k| !k.is_empty())?;
    Some(format!("{}k", karat.trim_end_matches(['k', 'K'])))
}
