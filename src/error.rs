//! # 统一错误处理模块
//!
//! 定义 mdconvert 的致命错误类型，使用 `thiserror` 派生。
//! 单文件转换错误见 `engine::ConversionError`，由批量执行器隔离处理，
//! 不会出现在这里。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mdconvert 统一错误类型
#[derive(Error, Debug)]
pub enum MdConvertError {
    // ─────────────────────────────────────────────────────────────
    // 启动错误
    // ─────────────────────────────────────────────────────────────
    #[error("Conversion engine '{command}' is not available\nHint: {hint}")]
    EngineUnavailable { command: String, hint: String },

    // ─────────────────────────────────────────────────────────────
    // 路径 / 遍历错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to walk directory: {path}")]
    Traversal {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MdConvertError>;
