//! # batch 命令实现
//!
//! 逐行计算 CSV 文件中的提交记录，每个输入文件输出一个结果 CSV。
//!
//! ## 功能
//! - 支持单文件和目录批量处理
//! - 并行处理多个文件（rayon）
//! - 校验失败的行记录错误消息，不中断整个文件
//! - 单文件模式显示终端汇总表格
//! - 输出目录镜像输入目录的子路径，同名文件互不覆盖
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行文件收集与并行处理
//! - 使用 `alloy/` 进行校验与计算

use crate::alloy::{self, format, validator};
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::error::{GoldAlloyError, Result};
use crate::models::{CalculationInput, CalculationResult};
use crate::utils::output;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 结果 CSV 表头
const RESULT_HEADER: [&str; 8] = [
    "row",
    "weight",
    "current_purity",
    "target_purity",
    "target_karat",
    "alloy_weight_g",
    "total_weight_g",
    "error",
];

/// 单行计算结果
#[derive(Debug, Clone)]
pub struct RowOutcome {
    /// 数据行号（从 1 开始，不含表头）
    pub row: usize,
    pub input: CalculationInput,
    pub result: CalculationResult,
}

impl RowOutcome {
    /// 有限的合金重量；溢出的结果视为无效
    pub fn alloy_weight(&self) -> Option<f64> {
        self.result.alloy_weight().filter(|g| g.is_finite())
    }

    /// 稀释后的总重量
    pub fn total_weight(&self) -> Option<f64> {
        let grams = self.alloy_weight()?;
        let weight = validator::parse_number(&self.input.weight)?;
        Some(alloy::total_weight(weight, grams)).filter(|t| t.is_finite())
    }

    /// 该行是否得到可用结果
    pub fn is_valid(&self) -> bool {
        self.total_weight().is_some()
    }

    /// 失败原因（校验失败或结果溢出）
    pub fn error_message(&self) -> Option<String> {
        match self.result.error() {
            Some(e) => Some(e.to_string()),
            None if !self.is_valid() => Some(GoldAlloyError::NonFiniteResult.to_string()),
            None => None,
        }
    }
}

/// 终端表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Weight (g)")]
    weight: String,
    #[tabled(rename = "Current (%)")]
    current: String,
    #[tabled(rename = "Target (%)")]
    target: String,
    #[tabled(rename = "Karat")]
    karat: String,
    #[tabled(rename = "Alloy (g)")]
    alloy: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 批量处理配置
struct BatchConfig {
    /// 输入根目录，用于计算相对子路径
    input_root: PathBuf,
    output_dir: PathBuf,
    overwrite: bool,
    /// 输出路径与先前输入冲突的文件 → 先前的输入
    collisions: HashMap<PathBuf, PathBuf>,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Alloy Calculation");

    if !args.input.exists() {
        return Err(GoldAlloyError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    // 确保输出目录存在（需先创建以便从扫描中排除）
    fs::create_dir_all(&args.output).map_err(|e| GoldAlloyError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let collector = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .exclude(&args.output);

    if collector.is_single_file() {
        let config = BatchConfig {
            input_root: args.input.parent().map(Path::to_path_buf).unwrap_or_default(),
            output_dir: args.output.clone(),
            overwrite: args.overwrite,
            collisions: HashMap::new(),
        };
        execute_single_file(&args, &config)
    } else {
        let files = collector.collect();
        if files.is_empty() {
            return Err(GoldAlloyError::NoFilesFound {
                pattern: args.pattern.clone(),
            });
        }
        let config = BatchConfig {
            collisions: find_collisions(&files, &args.input, &args.output),
            input_root: args.input.clone(),
            output_dir: args.output.clone(),
            overwrite: args.overwrite,
        };
        execute_batch(files, &args, &config)
    }
}

/// 单文件模式
fn execute_single_file(args: &BatchArgs, config: &BatchConfig) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let outcomes = evaluate_file(&args.input)?;
    let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();

    print_summary_table(&outcomes, args.show, args.digits);

    let output_path = output_path_for(&config.output_dir, &config.input_root, &args.input);
    if output_path.exists() && !config.overwrite {
        output::print_skip(&format!("Output exists, skipping: {}", output_path.display()));
    } else {
        write_results_file(&outcomes, &output_path)?;
        output::print_success(&format!("Results saved to '{}'", output_path.display()));
    }

    output::print_done(&format!(
        "{} rows evaluated, {} valid, {} invalid",
        outcomes.len(),
        outcomes.len() - invalid,
        invalid
    ));

    Ok(())
}

/// 批量处理模式
fn execute_batch(files: Vec<PathBuf>, args: &BatchArgs, config: &BatchConfig) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));
    output::print_info(&format!("Found {} CSV files", files.len()));

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));
    let result = runner.run(files, |file| process_batch_file(file, config))?;

    for message in &result.messages {
        match message {
            ProcessResult::Success(msg) => output::print_success(msg),
            ProcessResult::Skipped(msg) => output::print_skip(msg),
            ProcessResult::Failed(_, _) => {}
        }
    }

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} files, {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &PathBuf, config: &BatchConfig) -> ProcessResult {
    if let Some(first) = config.collisions.get(input) {
        return ProcessResult::Failed(
            input.display().to_string(),
            format!(
                "Output path collides with the result of '{}'",
                first.display()
            ),
        );
    }

    let output_path = output_path_for(&config.output_dir, &config.input_root, input);

    if output_path.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_path.display()
        ));
    }

    let outcomes = match evaluate_file(input) {
        Ok(o) => o,
        Err(e) => return ProcessResult::Failed(input.display().to_string(), e.to_string()),
    };

    if let Err(e) = write_results_file(&outcomes, &output_path) {
        return ProcessResult::Failed(input.display().to_string(), e.to_string());
    }

    let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();
    ProcessResult::Success(format!(
        "{}: {} rows ({} invalid) -> {}",
        input.display(),
        outcomes.len(),
        invalid,
        output_path.display()
    ))
}

/// 构造输出文件路径 `<output_dir>/<相对子路径>/<stem>_alloy.csv`
fn output_path_for(output_dir: &Path, input_root: &Path, input: &Path) -> PathBuf {
    let (subdir, stem) = match input.strip_prefix(input_root) {
        Ok(relative) => (
            relative.parent().map(Path::to_path_buf).unwrap_or_default(),
            relative.file_stem(),
        ),
        Err(_) => (PathBuf::new(), input.file_stem()),
    };
    let stem = stem.and_then(|s| s.to_str()).unwrap_or("output");
    output_dir.join(subdir).join(format!("{}_alloy.csv", stem))
}

/// 找出输出路径与先前输入相同的文件（如同目录下的 `melt.csv` 与 `melt.txt`）
fn find_collisions(
    files: &[PathBuf],
    input_root: &Path,
    output_dir: &Path,
) -> HashMap<PathBuf, PathBuf> {
    let mut claimed: HashMap<PathBuf, &PathBuf> = HashMap::new();
    let mut collisions = HashMap::new();

    for file in files {
        let output_path = output_path_for(output_dir, input_root, file);
        match claimed.get(&output_path) {
            Some(first) => {
                collisions.insert(file.clone(), (*first).clone());
            }
            None => {
                claimed.insert(output_path, file);
            }
        }
    }

    collisions
}

/// 读取并计算单个 CSV 文件
fn evaluate_file(path: &Path) -> Result<Vec<RowOutcome>> {
    let file = File::open(path).map_err(|e| GoldAlloyError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    evaluate_records(BufReader::new(file)).map_err(|e| match e {
        GoldAlloyError::CsvError(err) => GoldAlloyError::ParseError {
            path: path.display().to_string(),
            reason: err.to_string(),
        },
        other => other,
    })
}

/// 逐行计算 CSV 记录
///
/// 表头需包含 `weight`, `current_purity`, `target_purity`，`target_karat` 可选。
/// 单元格首尾空白会被去除。
pub fn evaluate_records<R: Read>(reader: R) -> Result<Vec<RowOutcome>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut outcomes = Vec::new();
    for (i, record) in rdr.deserialize::<CalculationInput>().enumerate() {
        let input = record?;
        let result = alloy::evaluate(&input);
        outcomes.push(RowOutcome {
            row: i + 1,
            input,
            result,
        });
    }

    Ok(outcomes)
}

/// 写入结果 CSV
pub fn write_results<W: Write>(outcomes: &[RowOutcome], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(RESULT_HEADER)?;

    for o in outcomes {
        wtr.write_record(&[
            o.row.to_string(),
            o.input.weight.clone(),
            o.input.current_purity.clone(),
            o.input.target_purity.clone(),
            o.input.target_karat.clone().unwrap_or_default(),
            o.total_weight()
                .and(o.alloy_weight())
                .map(|g| format!("{:.6}", g))
                .unwrap_or_default(),
            o.total_weight()
                .map(|g| format!("{:.6}", g))
                .unwrap_or_default(),
            o.error_message().unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|e| GoldAlloyError::Other(e.to_string()))?;

    Ok(())
}

fn write_results_file(outcomes: &[RowOutcome], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| GoldAlloyError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| GoldAlloyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_results(outcomes, file)
}

/// 打印行结果表格
fn print_summary_table(outcomes: &[RowOutcome], count: usize, digits: usize) {
    let rows: Vec<SummaryRow> = outcomes
        .iter()
        .take(count)
        .map(|o| SummaryRow {
            row: o.row,
            weight: o.input.weight.clone(),
            current: o.input.current_purity.clone(),
            target: o.input.target_purity.clone(),
            karat: format::karat_label(o.input.target_karat.as_deref()).unwrap_or_default(),
            alloy: o
                .total_weight()
                .and(o.alloy_weight())
                .map(|g| format::format_grams(g, digits))
                .unwrap_or_default(),
            status: o.error_message().unwrap_or_else(|| "OK".to_string()),
        })
        .collect();

    if rows.is_empty() {
        output::print_warning("No rows found in input file.");
        return;
    }

    output::print_header(&format!("First {} Rows", rows.len()));
    println!("{}", Table::new(&rows));
    if outcomes.len() > rows.len() {
        output::print_info(&format!("... and {} more rows", outcomes.len() - rows.len()));
    }
}
