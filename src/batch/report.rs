//! # 批量处理报告导出
//!
//! 将逐文件处理结果导出为 CSV（source, output, status, error）。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchResult
//! - 使用 `csv` + `serde` 写入

use crate::batch::runner::{BatchResult, ProcessResult};
use crate::error::{MdConvertError, Result};

use serde::Serialize;
use std::path::Path;

/// 报告行
#[derive(Debug, Serialize)]
struct ReportRow {
    source: String,
    output: String,
    status: &'static str,
    error: String,
}

impl From<&ProcessResult> for ReportRow {
    fn from(result: &ProcessResult) -> Self {
        let (status, error) = match result {
            ProcessResult::Success { .. } => ("converted", String::new()),
            ProcessResult::Skipped { .. } => ("skipped", String::new()),
            ProcessResult::Failed { error, .. } => ("failed", error.clone()),
        };

        ReportRow {
            source: result.source().display().to_string(),
            output: result.output().display().to_string(),
            status,
            error,
        }
    }
}

/// 导出处理报告为 CSV
pub fn to_csv(result: &BatchResult, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MdConvertError::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in result.results.iter().map(ReportRow::from) {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| MdConvertError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_report_rows() {
        let mut batch = BatchResult::default();
        batch.merge(ProcessResult::Success {
            source: PathBuf::from("in/a.pdf"),
            output: PathBuf::from("out/a.md"),
        });
        batch.merge(ProcessResult::Skipped {
            source: PathBuf::from("in/b.pdf"),
            output: PathBuf::from("out/b.md"),
        });
        batch.merge(ProcessResult::Failed {
            source: PathBuf::from("in/c.pdf"),
            output: PathBuf::from("out/c.md"),
            error: "Unsupported format: c.pdf".to_string(),
        });

        let dir = TempDir::new().unwrap();
        let report = dir.path().join("logs/report.csv");
        to_csv(&batch, &report).unwrap();

        let content = std::fs::read_to_string(&report).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "source,output,status,error");
        assert_eq!(lines[1], "in/a.pdf,out/a.md,converted,");
        assert_eq!(lines[2], "in/b.pdf,out/b.md,skipped,");
        assert_eq!(lines[3], "in/c.pdf,out/c.md,failed,Unsupported format: c.pdf");
    }
}
