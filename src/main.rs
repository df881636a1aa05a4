//! # mdconvert - 文档批量转换为 Markdown
//!
//! 遍历输入文件/目录，调用转换引擎（默认外部 `markitdown`）把 PDF、Office、
//! HTML、邮件、文本等文档转换为 Markdown，并在输出目录中保留相对目录结构。
//!
//! ## 退出码
//! - `0` - 所有文件转换成功或被跳过
//! - `1` - 存在转换失败的文件，或发生致命错误（引擎不可用、输入不存在）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件发现、输出路径、逐文件转换)
//!   │     └── engine/   (转换引擎)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod engine;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli.args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
