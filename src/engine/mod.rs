//! # 转换引擎模块
//!
//! 定义文档 → Markdown 转换能力接口，批量执行器只依赖该 trait。
//!
//! ## 引擎
//! - `markitdown` - 调用外部 `markitdown` 命令（默认）
//! - `native` - 内置转换，仅支持文本类格式
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/convert.rs` 使用
//! - 子模块: markitdown, native

pub mod markitdown;
pub mod native;

pub use markitdown::MarkItDown;
pub use native::NativeConverter;

use std::path::Path;
use thiserror::Error;

/// 单文件转换错误
///
/// 由批量执行器捕获并计入失败数，不会中断整批处理。
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("External command '{command}' could not be started: {source}")]
    CommandNotStarted {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Unsupported format: {0}")]
    Unsupported(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// 文档转换能力
pub trait DocumentConverter {
    /// 引擎名称（用于提示信息）
    fn name(&self) -> &str;

    /// 将 `path` 指向的文档转换为 Markdown 文本
    fn convert(&self, path: &Path) -> Result<String, ConversionError>;
}

impl<T: DocumentConverter + ?Sized> DocumentConverter for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn convert(&self, path: &Path) -> Result<String, ConversionError> {
        (**self).convert(path)
    }
}
