//! # 输出路径布局
//!
//! 计算每个源文件对应的 `.md` 输出路径，保留相对于基准根目录的目录结构。
//!
//! ## 规则
//! - 基准根目录：输入中第一个目录；若没有目录，则取第一个输入的父目录
//! - `keep_ext = false`: `sub/report.pdf` -> `<out>/sub/report.md`
//! - `keep_ext = true`:  `sub/report.pdf` -> `<out>/sub/report.pdf.md`
//! - 不在基准根目录下的文件：去掉根/盘符前缀后整体挂到输出目录下
//!
//! 同一目录下 `report.pdf` 与 `report.docx` 会映射到同一个 `report.md`，
//! 后处理者覆盖（或被跳过），不做纠正。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/convert.rs` 使用
//! - 无外部模块依赖

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// 选择基准根目录
pub fn select_base_root(inputs: &[PathBuf]) -> Option<PathBuf> {
    if let Some(dir) = inputs.iter().find(|p| p.is_dir()) {
        return Some(dir.clone());
    }

    inputs
        .first()
        .map(|first| first.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// 输出路径布局
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// 输出根目录
    out_dir: PathBuf,
    /// 基准根目录
    base_root: PathBuf,
    /// 是否保留原扩展名（`report.pdf.md`）
    keep_ext: bool,
}

impl OutputLayout {
    pub fn new(out_dir: PathBuf, base_root: PathBuf) -> Self {
        Self {
            out_dir,
            base_root,
            keep_ext: false,
        }
    }

    /// 设置是否保留原扩展名
    pub fn keep_ext(mut self, keep_ext: bool) -> Self {
        self.keep_ext = keep_ext;
        self
    }

    /// 计算源文件的输出路径
    pub fn output_path(&self, src: &Path) -> PathBuf {
        let rel = self.relative_to_base(src);

        let mut out_name = if self.keep_ext {
            rel.file_name().map(OsString::from).unwrap_or_default()
        } else {
            rel.file_stem().map(OsString::from).unwrap_or_default()
        };
        out_name.push(".md");

        let mut out = self.out_dir.clone();
        if let Some(parent) = rel.parent() {
            out.push(parent);
        }
        out.push(out_name);
        out
    }

    /// 源文件相对于基准根目录的路径
    ///
    /// 不在基准根目录下时只保留普通路径分量，结果始终是相对路径。
    fn relative_to_base(&self, src: &Path) -> PathBuf {
        match src.strip_prefix(&self.base_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => src
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part),
                    _ => None,
                })
                .collect(),
        }
    }
}
