//! # convert 命令实现
//!
//! 批量转换文档为 Markdown。
//!
//! ## 功能
//! - 初始化转换引擎（markitdown 不可用时立即失败）
//! - 确定基准根目录，按相对结构写入输出目录
//! - 顺序转换，已存在的输出默认跳过
//! - 输出汇总与失败列表，可选导出 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `engine/`
//! - 使用 `utils/output.rs`

use crate::batch::{
    report, select_base_root, BatchResult, BatchRunner, ExtensionFilter, FileCollector,
    OutputLayout,
};
use crate::cli::convert::{ConvertArgs, EngineKind};
use crate::engine::{DocumentConverter, MarkItDown, NativeConverter};
use crate::error::{MdConvertError, Result};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败列表行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<BatchResult> {
    output::print_header("Converting documents to Markdown");

    // 初始化引擎
    let engine: Box<dyn DocumentConverter> = match args.engine {
        EngineKind::Markitdown => {
            let engine = MarkItDown::detect(args.markitdown_bin.clone())?;
            output::print_info(&format!("Found markitdown: {}", engine.program()));
            Box::new(engine)
        }
        EngineKind::Native => Box::new(NativeConverter::new()),
    };
    output::print_info(&format!("Using {} engine", engine.name()));

    let inputs: Vec<PathBuf> = args.input.iter().map(|p| resolve_path(p)).collect();
    let out_dir = resolve_path(&args.out_dir);

    // 创建输出目录
    fs::create_dir_all(&out_dir).map_err(|e| MdConvertError::FileWriteError {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    let base_root = select_base_root(&inputs).unwrap_or_else(|| out_dir.clone());

    let filter = ExtensionFilter::new(&args.ext);
    if filter.is_empty() {
        output::print_info("No extension filter: every file is included");
    } else {
        output::print_info(&format!(
            "Extensions: {}",
            filter.iter().collect::<Vec<_>>().join(" ")
        ));
    }
    output::print_info(&format!("Base root: {}", base_root.display()));
    output::print_info(&format!("Output: {}", out_dir.display()));

    let collector = FileCollector::new(inputs)
        .with_extensions(filter)
        .recursive(args.recursive);
    let layout = OutputLayout::new(out_dir, base_root).keep_ext(args.keep_ext);
    let runner = BatchRunner::new(engine, layout)
        .overwrite(args.overwrite)
        .debug(args.debug)
        .show_progress(!args.no_progress);

    let result = runner.run(collector.iter())?;

    if result.total == 0 {
        output::print_warning("No files matched the given inputs and extensions");
    }

    if let Some(report_path) = &args.report {
        report::to_csv(&result, report_path)?;
        output::print_info(&format!("Report written to {}", report_path.display()));
    }

    print_summary(&result);

    Ok(result)
}

/// 转为绝对路径（存在时解析符号链接）
fn resolve_path(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// 打印汇总与失败列表
fn print_summary(result: &BatchResult) {
    if result.fail > 0 {
        let rows: Vec<FailureRow> = result
            .failures()
            .map(|(source, error)| FailureRow {
                file: source.display().to_string(),
                error: error.lines().next().unwrap_or_default().to_string(),
            })
            .collect();
        println!("\n{}\n", Table::new(&rows));
    }

    output::print_done(&format!(
        "Done. Total: {} | OK: {} | Errors: {} ({} skipped)",
        result.total, result.ok, result.fail, result.skipped
    ));
}
