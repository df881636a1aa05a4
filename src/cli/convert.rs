//! # convert 参数定义
//!
//! 批量将文档转换为 Markdown (.pdf/.docx/.pptx/.xlsx/.html/.eml/... -> .md)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::batch::DEFAULT_EXTENSIONS;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 默认输出目录
pub const DEFAULT_OUT_DIR: &str = ".local/out/markitdown";

/// 转换引擎类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EngineKind {
    /// External `markitdown` command (all formats)
    Markitdown,
    /// Built-in converter (txt, md, csv, json, html)
    Native,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Markitdown => write!(f, "markitdown"),
            EngineKind::Native => write!(f, "native"),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// convert 参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file(s) or directory(ies)
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, env = "MDCONVERT_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Recurse into subdirectories when reading directories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Extensions to include (e.g. .pdf .docx); pass `--ext` alone to include every file
    #[arg(long, num_args = 0.., default_values_t = default_extensions())]
    pub ext: Vec<String>,

    /// Keep the original extension in the output name (file.pdf -> file.pdf.md)
    #[arg(long, default_value_t = false)]
    pub keep_ext: bool,

    /// Overwrite already converted files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Print the full error chain when a conversion fails
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Conversion engine
    #[arg(long, value_enum, default_value_t = EngineKind::Markitdown)]
    pub engine: EngineKind,

    /// markitdown executable used by the markitdown engine
    #[arg(long, env = "MARKITDOWN_BIN", default_value = "markitdown")]
    pub markitdown_bin: String,

    /// Write a per-file CSV report (source, output, status, error)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Disable the progress spinner
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
