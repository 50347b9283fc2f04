use crate::commands::traits::{Command, CommandContext, HelloArgs};
use crate::error::Result as HelloResult;
use crate::format::format_message;

/// 第一条消息的原文
pub const HELLO_WORLD: &str = "Hello, world!";

/// 第二条消息的原文，`{0}` 为进程号
pub const PROCESS_NUMBER: &str = "This program is running as process number {0}.";

/// Hello命令实现
pub struct HelloCommand {
    context: CommandContext,
}

impl HelloCommand {
    pub fn new(context: CommandContext) -> Self {
        HelloCommand { context }
    }
}

impl Command for HelloCommand {
    type Args = HelloArgs;
    type Output = Vec<String>;

    fn execute(&self, args: Self::Args) -> HelloResult<Self::Output> {
        let catalog = &self.context.catalog;

        let greeting = catalog.lookup(HELLO_WORLD).to_string();
        let process_line = format_message(catalog.lookup(PROCESS_NUMBER), &[&args.pid]);

        tracing::debug!(
            domain = catalog.domain(),
            culture = ?self.context.culture.as_ref().map(|c| c.name()),
            pid = args.pid,
            "rendered messages"
        );

        Ok(vec![greeting, process_line])
    }
}
