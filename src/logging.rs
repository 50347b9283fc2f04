//! 日志初始化
//!
//! 标准输出只用于程序的两行消息，日志统一写到标准错误。

use crate::error::Result as HelloResult;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 根据 `-v` 的次数选择默认日志级别
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// 初始化全局日志，设置了 `RUST_LOG` 时以它为准
pub fn init_logging(verbosity: u8) -> HelloResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    tracing::debug!(verbosity, "logging initialized");
    Ok(())
}
