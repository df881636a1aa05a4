//! # 文件收集器
//!
//! 根据输入路径列表和扩展名白名单惰性地枚举待转换文件。
//!
//! ## 功能
//! - 支持单文件和目录输入（可混合、按给定顺序处理、不去重）
//! - 扩展名白名单过滤（大小写不敏感，空白名单表示全部允许）
//! - 可选递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{MdConvertError, Result};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认扩展名白名单
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".pdf", ".docx", ".pptx", ".xlsx", ".html", ".htm", ".eml", ".txt", ".csv", ".json",
];

/// 扩展名白名单（小写、带前导点）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: BTreeSet<String>,
}

impl ExtensionFilter {
    /// 由用户输入构造，`pdf` 与 `.PDF` 均规范化为 `.pdf`
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .map(|e| if e.starts_with('.') { e } else { format!(".{}", e) })
            .collect();
        Self { allowed }
    }

    /// 空白名单：允许所有文件
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// 检查文件扩展名是否允许
    pub fn allows(&self, path: &Path) -> bool {
        if self.allowed.is_empty() {
            return true;
        }

        match path.extension() {
            Some(ext) => {
                let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.allowed.contains(&ext)
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    inputs: Vec<PathBuf>,
    /// 扩展名白名单
    filter: ExtensionFilter,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            filter: ExtensionFilter::allow_all(),
            recursive: false,
        }
    }

    /// 设置扩展名白名单
    pub fn with_extensions(mut self, filter: ExtensionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 惰性枚举所有匹配的文件
    ///
    /// 不存在的输入和遍历错误以 `Err` 形式产出，由调用方决定是否终止。
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        self.inputs.iter().flat_map(move |input| self.walk_input(input))
    }

    fn walk_input<'a>(
        &'a self,
        input: &'a Path,
    ) -> Box<dyn Iterator<Item = Result<PathBuf>> + 'a> {
        if input.is_file() {
            let matched = self.filter.allows(input).then(|| Ok(input.to_path_buf()));
            return Box::new(matched.into_iter());
        }

        if !input.is_dir() {
            return Box::new(std::iter::once(Err(MdConvertError::InputNotFound {
                path: input.display().to_string(),
            })));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(input)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter();

        Box::new(walker.filter_map(move |entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                (path.is_file() && self.filter.allows(path)).then(|| Ok(path.to_path_buf()))
            }
            Err(e) => Some(Err(MdConvertError::Traversal {
                path: e.path().unwrap_or(input).display().to_string(),
                source: e,
            })),
        }))
    }
}
