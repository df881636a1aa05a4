//! # 批量处理模块
//!
//! 提供文件发现、输出路径布局和逐文件转换。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 扩展名过滤与可选递归
//! - 保留相对目录结构的输出路径
//! - 顺序转换、错误隔离与统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `engine/` 进行转换
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod layout;
pub mod report;
pub mod runner;

pub use collector::{ExtensionFilter, FileCollector, DEFAULT_EXTENSIONS};
pub use layout::{select_base_root, OutputLayout};
pub use runner::{BatchResult, BatchRunner};
