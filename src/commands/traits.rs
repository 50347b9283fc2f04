use crate::catalog::Catalog;
use crate::error::Result as HelloResult;
use crate::locale::Culture;
use std::path::Path;

/// 统一的命令接口
pub trait Command {
    type Args;
    type Output;

    /// 执行命令
    fn execute(&self, args: Self::Args) -> HelloResult<Self::Output>;
}

/// 命令执行上下文，持有进程生命周期内只读的消息目录
pub struct CommandContext {
    pub catalog: Catalog,
    pub culture: Option<Culture>,
}

impl CommandContext {
    pub fn new(domain: &str, locale_dir: &Path, culture: Option<&Culture>) -> HelloResult<Self> {
        let catalog = Catalog::open(domain, locale_dir, culture)?;

        Ok(CommandContext {
            catalog,
            culture: culture.cloned(),
        })
    }

    /// 不加载任何目录文件的上下文，输出总是原文
    pub fn untranslated(domain: &str) -> Self {
        CommandContext {
            catalog: Catalog::untranslated(domain),
            culture: None,
        }
    }
}

// 命令参数结构体定义

/// Hello命令参数
#[derive(Debug, Clone)]
pub struct HelloArgs {
    /// 要显示的进程号
    pub pid: u32,
}

impl HelloArgs {
    /// 使用当前进程号
    pub fn current_process() -> Self {
        HelloArgs {
            pid: std::process::id(),
        }
    }
}
