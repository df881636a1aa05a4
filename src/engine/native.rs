//! # 内置转换引擎
//!
//! 不依赖外部命令，处理文本类格式：
//! - `.txt`, `.md`, `.markdown` - 原样输出
//! - `.csv` - 转为 Markdown 表格（首行作为表头）
//! - `.json` - 包裹为 ```json 代码块
//! - `.html`, `.htm` - 使用 `html2md` 转换
//!
//! 其他格式返回 `ConversionError::Unsupported`。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 创建
//! - 使用 `csv`, `html2md`, `regex`

use super::{ConversionError, DocumentConverter};

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// 连续三个及以上换行
static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();

/// 内置转换器
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConverter;

impl NativeConverter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for NativeConverter {
    fn name(&self) -> &str {
        "native"
    }

    fn convert(&self, path: &Path) -> Result<String, ConversionError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let markdown = match ext.as_str() {
            "txt" | "md" | "markdown" => read_text(path)?,
            "csv" => csv_to_markdown(path)?,
            "json" => json_to_markdown(&read_text(path)?),
            "html" | "htm" => html2md::parse_html(&read_text(path)?),
            _ => {
                return Err(ConversionError::Unsupported(format!(
                    "'{}' (native engine handles txt, md, csv, json, html)",
                    path.display()
                )))
            }
        };

        Ok(clean_markdown(&markdown))
    }
}

fn read_text(path: &Path) -> Result<String, ConversionError> {
    let bytes = fs::read(path).map_err(|e| ConversionError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// CSV → Markdown 表格
fn csv_to_markdown(path: &Path) -> Result<String, ConversionError> {
    let csv_err = |e: csv::Error| ConversionError::Csv {
        path: path.display().to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        rows.push(record.iter().map(escape_cell).collect());
    }

    Ok(rows_to_table(&rows))
}

fn escape_cell(cell: &str) -> String {
    cell.trim()
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

/// 行数据 → Markdown 表格，短行补齐空单元格
fn rows_to_table(rows: &[Vec<String>]) -> String {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return String::new();
    }

    let format_row = |row: &[String]| {
        let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
        cells.resize(width, "");
        format!("| {} |\n", cells.join(" | "))
    };

    let mut result = String::new();
    result.push_str(&format_row(&rows[0]));
    result.push_str(&format!("|{}\n", " --- |".repeat(width)));
    for row in &rows[1..] {
        result.push_str(&format_row(row));
    }
    result
}

fn json_to_markdown(content: &str) -> String {
    format!("```json\n{}\n```\n", content.trim_end())
}

/// 规范化 Markdown：去除行尾空白、合并多余空行、保留单个结尾换行
pub fn clean_markdown(md: &str) -> String {
    let blank_runs = BLANK_RUNS.get_or_init(|| Regex::new(r"\n{3,}").unwrap());

    let trimmed_lines = md
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    let collapsed = blank_runs.replace_all(&trimmed_lines, "\n\n");
    let result = collapsed.trim_end();

    if result.is_empty() {
        String::new()
    } else {
        format!("{}\n", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_clean_markdown() {
        assert_eq!(clean_markdown("# Title   \n\n\n\nBody\t\n\n"), "# Title\n\nBody\n");
        assert_eq!(clean_markdown("\n\n  \n"), "");
        assert!(BLANK_RUNS.get().is_some());
    }

    #[test]
    fn test_text_passthrough() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes.TXT", "hello\nworld");
        let md = NativeConverter::new().convert(&path).unwrap();
        assert_eq!(md, "hello\nworld\n");
    }

    #[test]
    fn test_csv_table() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "data.csv", "name,value\nalpha,1\nbeta|x\n");
        let md = NativeConverter::new().convert(&path).unwrap();
        assert_eq!(
            md,
            "| name | value |\n| --- | --- |\n| alpha | 1 |\n| beta\\|x |  |\n"
        );
    }

    #[test]
    fn test_json_code_block() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "cfg.json", "{\"a\": 1}\n");
        let md = NativeConverter::new().convert(&path).unwrap();
        assert_eq!(md, "```json\n{\"a\": 1}\n```\n");
    }

    #[test]
    fn test_html_heading() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "page.html", "<h1>Report</h1><p>Body text</p>");
        let md = NativeConverter::new().convert(&path).unwrap();
        assert!(md.contains("Report"));
        assert!(md.contains("Body text"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "slides.pptx", "binary");
        let err = NativeConverter::new().convert(&path).unwrap_err();
        assert!(matches!(err, ConversionError::Unsupported(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = NativeConverter::new()
            .convert(&dir.path().join("gone.txt"))
            .unwrap_err();
        assert!(matches!(err, ConversionError::ReadError { .. }));
    }
}
