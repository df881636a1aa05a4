//! # 批量执行器
//!
//! 按发现顺序逐个转换文件并写出 Markdown。
//!
//! ## 功能
//! - 输出已存在且未要求覆盖时跳过（不调用转换引擎，计入成功）
//! - 单文件转换/写入失败只记录并计数，不中断整批
//! - 文件发现阶段的错误视为致命错误，立即返回
//! - 计数器作为 `BatchResult` 返回，无全局状态
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `engine/` 的 `DocumentConverter`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::layout::OutputLayout;
use crate::engine::{ConversionError, DocumentConverter};
use crate::error::Result;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 转换成功
    Success { source: PathBuf, output: PathBuf },
    /// 跳过（输出文件已存在）
    Skipped { source: PathBuf, output: PathBuf },
    /// 转换或写入失败
    Failed {
        source: PathBuf,
        output: PathBuf,
        error: String,
    },
}

impl ProcessResult {
    pub fn source(&self) -> &Path {
        match self {
            ProcessResult::Success { source, .. }
            | ProcessResult::Skipped { source, .. }
            | ProcessResult::Failed { source, .. } => source,
        }
    }

    pub fn output(&self) -> &Path {
        match self {
            ProcessResult::Success { output, .. }
            | ProcessResult::Skipped { output, .. }
            | ProcessResult::Failed { output, .. } => output,
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 发现的文件总数
    pub total: usize,
    /// 成功数量（含跳过）
    pub ok: usize,
    /// 其中跳过的数量
    pub skipped: usize,
    /// 失败数量
    pub fail: usize,
    /// 逐文件结果（按处理顺序）
    pub results: Vec<ProcessResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        self.total += 1;
        match &result {
            ProcessResult::Success { .. } => self.ok += 1,
            ProcessResult::Skipped { .. } => {
                self.ok += 1;
                self.skipped += 1;
            }
            ProcessResult::Failed { .. } => self.fail += 1,
        }
        self.results.push(result);
    }

    /// 是否全部成功（决定进程退出码）
    pub fn is_success(&self) -> bool {
        self.fail == 0
    }

    /// 失败详情 (源文件, 错误信息)
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.results.iter().filter_map(|r| match r {
            ProcessResult::Failed { source, error, .. } => {
                Some((source.as_path(), error.as_str()))
            }
            _ => None,
        })
    }
}

/// 批量执行器
pub struct BatchRunner<C> {
    /// 转换引擎
    engine: C,
    /// 输出路径布局
    layout: OutputLayout,
    /// 是否覆盖已存在的输出
    overwrite: bool,
    /// 出错时打印完整错误链
    debug: bool,
    /// 是否显示进度 spinner
    show_progress: bool,
}

impl<C: DocumentConverter> BatchRunner<C> {
    /// 创建新的批量执行器
    pub fn new(engine: C, layout: OutputLayout) -> Self {
        Self {
            engine,
            layout,
            overwrite: false,
            debug: false,
            show_progress: false,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 顺序处理发现的文件
    ///
    /// `files` 中的 `Err` 会终止整批并原样返回。
    pub fn run<I>(&self, files: I) -> Result<BatchResult>
    where
        I: IntoIterator<Item = Result<PathBuf>>,
    {
        let pb = if self.show_progress {
            progress::create_spinner("Converting")
        } else {
            ProgressBar::hidden()
        };

        let mut batch_result = BatchResult::default();

        for file in files {
            let src = match file {
                Ok(src) => src,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            };

            pb.set_message(format!("Converting {}", src.display()));
            let result = self.process(&src, &pb);
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(batch_result)
    }

    /// 处理单个文件
    fn process(&self, src: &Path, pb: &ProgressBar) -> ProcessResult {
        let out_path = self.layout.output_path(src);

        if out_path.exists() && !self.overwrite {
            pb.suspend(|| {
                output::print_skip(&format!(
                    "{} -> {} (already exists)",
                    src.display(),
                    out_path.display()
                ));
            });
            return ProcessResult::Skipped {
                source: src.to_path_buf(),
                output: out_path,
            };
        }

        match self.convert_and_write(src, &out_path) {
            Ok(()) => {
                pb.suspend(|| {
                    output::print_conversion(
                        &src.display().to_string(),
                        &out_path.display().to_string(),
                    );
                });
                ProcessResult::Success {
                    source: src.to_path_buf(),
                    output: out_path,
                }
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", src.display(), e));
                    if self.debug {
                        output::print_error_chain(&e);
                    }
                });
                ProcessResult::Failed {
                    source: src.to_path_buf(),
                    output: out_path,
                    error: e.to_string(),
                }
            }
        }
    }

    fn convert_and_write(
        &self,
        src: &Path,
        out_path: &Path,
    ) -> std::result::Result<(), ConversionError> {
        let markdown = self.engine.convert(src)?;

        let write_err = |e: std::io::Error| ConversionError::WriteError {
            path: out_path.display().to_string(),
            source: e,
        };

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(out_path, markdown).map_err(write_err)?;

        Ok(())
    }
}
