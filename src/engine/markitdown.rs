//! # markitdown 引擎
//!
//! 通过外部 `markitdown` 命令完成转换，stdout 即 Markdown 结果。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 创建
//! - 需要 PATH 中存在 `markitdown`（`pip install "markitdown[all]"`）

use super::{ConversionError, DocumentConverter};
use crate::error::{MdConvertError, Result};

use std::path::Path;
use std::process::{Command, Stdio};

/// 安装提示
pub const INSTALL_HINT: &str = "install it with: pip install \"markitdown[all]\"";

/// 外部 markitdown 命令封装
#[derive(Debug, Clone)]
pub struct MarkItDown {
    /// 可执行文件名或路径
    program: String,
}

impl MarkItDown {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 检查命令是否可用，不可用时返回致命的启动错误
    pub fn detect(program: impl Into<String>) -> Result<Self> {
        let engine = Self::new(program);

        let unavailable = || MdConvertError::EngineUnavailable {
            command: engine.program.clone(),
            hint: INSTALL_HINT.to_string(),
        };

        let output = Command::new(&engine.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|_| unavailable())?;

        if !output.status.success() {
            return Err(unavailable());
        }

        Ok(engine)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl DocumentConverter for MarkItDown {
    fn name(&self) -> &str {
        "markitdown"
    }

    fn convert(&self, path: &Path) -> std::result::Result<String, ConversionError> {
        let output = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ConversionError::CommandNotStarted {
                command: self.program.clone(),
                source: e,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(ConversionError::CommandFailed {
                command: format!("{} {}", self.program, path.display()),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "mdconvert-test-no-such-markitdown";

    #[test]
    fn test_detect_missing_command() {
        let err = MarkItDown::detect(MISSING).unwrap_err();
        match err {
            MdConvertError::EngineUnavailable { command, hint } => {
                assert_eq!(command, MISSING);
                assert!(hint.contains("markitdown"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_convert_missing_command_is_per_file_error() {
        let engine = MarkItDown::new(MISSING);
        let err = engine.convert(Path::new("report.pdf")).unwrap_err();
        assert!(matches!(err, ConversionError::CommandNotStarted { .. }));
        assert!(err.to_string().contains("could not be started"));
    }

    /// 写出一个模拟 markitdown 的脚本：`--version` 成功，路径含 `bad` 时失败
    #[cfg(unix)]
    fn fake_markitdown(dir: &tempfile::TempDir) -> String {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.path().join("fake-markitdown");
        std::fs::write(
            &script,
            r##"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "markitdown 0.1.0"
    exit 0
fi
case "$1" in
    *bad*) echo "boom" >&2; exit 2 ;;
esac
echo "# converted $1"
"##,
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script.display().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn test_external_command_success_and_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let program = fake_markitdown(&dir);

        let engine = MarkItDown::detect(program.clone()).unwrap();
        assert_eq!(engine.program(), program);
        assert_eq!(engine.name(), "markitdown");

        let md = engine.convert(Path::new("/x/a.pdf")).unwrap();
        assert_eq!(md, "# converted /x/a.pdf\n");

        match engine.convert(Path::new("/x/bad.pdf")).unwrap_err() {
            ConversionError::CommandFailed { command, stderr } => {
                assert_eq!(command, format!("{} /x/bad.pdf", program));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_detect_rejects_failing_version() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("broken-markitdown");
        std::fs::write(&script, "#!/bin/sh\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = MarkItDown::detect(script.display().to_string()).unwrap_err();
        assert!(matches!(err, MdConvertError::EngineUnavailable { .. }));
    }
}
