use crate::locale::{self, Culture};
use lazy_static::lazy_static;

/// 界面字符串的默认语言
pub const DEFAULT_UI_LOCALE: &str = "en";

lazy_static! {
    // 从 LC_ALL / LANG 推导的区域，进程内只解析一次
    // 格式通常是 `en_US.UTF-8`，规范化后为 `en-US`
    static ref DETECTED: Option<Culture> = locale::culture_from_env();
}

/// 环境变量中检测到的区域
pub fn detected_culture() -> Option<&'static Culture> {
    DETECTED.as_ref()
}

/// 界面字符串应使用的 rust-i18n locale
pub fn ui_locale(culture: Option<&Culture>) -> String {
    culture
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| DEFAULT_UI_LOCALE.to_string())
}

/// 初始化国际化设置
///
/// 把区域设为程序自身界面字符串（帮助信息、错误提示）的当前语言。
/// 它应该在程序启动时尽早被调用；消息目录的查找使用同一个区域。
pub fn setup_i18n(culture: Option<&Culture>) {
    // 没有对应翻译文件的 locale 会回退到 en
    rust_i18n::set_locale(&ui_locale(culture));
}
