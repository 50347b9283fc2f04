pub mod traits;

// 命令模块
pub mod hello;

// 重新导出主要类型
pub use hello::{HELLO_WORLD, HelloCommand, PROCESS_NUMBER};
pub use traits::{Command, CommandContext, HelloArgs};
