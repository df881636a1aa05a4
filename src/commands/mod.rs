//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `engine/`, `utils/`
//! - 子模块: convert

pub mod convert;

use crate::cli::convert::ConvertArgs;
use crate::error::Result;

/// 执行命令，返回是否所有文件都成功（决定退出码）
pub fn run(args: ConvertArgs) -> Result<bool> {
    convert::execute(args).map(|result| result.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn native_args(input: &str, out: &str, ext: &[&str]) -> ConvertArgs {
        let mut argv = vec![
            "mdconvert",
            "--no-progress",
            "--engine",
            "native",
            "-i",
            input,
            "-o",
            out,
        ];
        if !ext.is_empty() {
            argv.push("--ext");
            argv.extend_from_slice(ext);
        }
        Cli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_run_reports_success() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.txt"), "hello").unwrap();
        let out = tmp.path().join("out").display().to_string();

        let ok = run(native_args(&input.display().to_string(), &out, &[])).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_run_reports_failure() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a.txt"), "hello").unwrap();
        fs::write(input.join("b.png"), [0x89u8, b'P', b'N', b'G']).unwrap();
        let out = tmp.path().join("out").display().to_string();

        let ok = run(native_args(
            &input.display().to_string(),
            &out,
            &[".txt", ".png"],
        ))
        .unwrap();
        assert!(!ok);
    }
}
