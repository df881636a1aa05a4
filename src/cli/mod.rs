//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//! 单一命令，参数集中在 `convert::ConvertArgs`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// mdconvert - 文档批量转换为 Markdown
#[derive(Parser, Debug)]
#[command(name = "mdconvert")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Convert documents to Markdown using MarkItDown", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: convert::ConvertArgs,
}
