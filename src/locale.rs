use std::env;
use std::fmt;

/// 按优先级排列的语言环境变量：LC_ALL 优先，其次 LANG
pub const LOCALE_VARS: [&str; 2] = ["LC_ALL", "LANG"];

/// 规范化后的区域标识，例如 `en-US`、`de`、`zh-CN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    name: String,
}

impl Culture {
    /// 解析 POSIX 风格的 locale 字符串
    ///
    /// 去掉第一个 `.` 之后的编码部分，并把 `_` 替换为 `-`：
    /// `en_US.UTF-8` → `en-US`。空值、`C`/`POSIX` 以及格式不正确的值返回 `None`，
    /// 调用方应当把它视为“不切换区域”。
    pub fn parse(raw: &str) -> Option<Self> {
        let base = match raw.find('.') {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        let name = base.trim().replace('_', "-");

        if name.is_empty() || name == "C" || name == "POSIX" {
            return None;
        }
        if !is_well_formed(&name) {
            tracing::debug!(locale = raw, "ignoring malformed locale");
            return None;
        }

        Some(Culture { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 语言部分，例如 `en-US` 中的 `en`
    pub fn language(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }

    /// 地区部分，例如 `en-US` 中的 `US`
    pub fn region(&self) -> Option<&str> {
        self.name.split('-').nth(1)
    }

    /// 在 locale 目录下依次尝试的子目录名，越具体越靠前
    pub fn catalog_names(&self) -> Vec<String> {
        let mut names = vec![self.name.replace('-', "_")];
        if self.name.contains('-') {
            names.push(self.language().to_string());
        }
        names
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn is_well_formed(name: &str) -> bool {
    let mut parts = name.split('-');
    let lang_ok = parts.next().is_some_and(|lang| {
        (2..=8).contains(&lang.len()) && lang.chars().all(|c| c.is_ascii_alphabetic())
    });

    lang_ok
        && parts.all(|sub| {
            (1..=8).contains(&sub.len()) && sub.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

/// 从进程环境变量中推导区域
pub fn culture_from_env() -> Option<Culture> {
    culture_from_lookup(|key| env::var(key).ok())
}

/// 与 [`culture_from_env`] 相同的逻辑，但变量来源可以替换
///
/// 第一个非空的变量生效；即便它无法解析，也不会再继续查找下一个变量。
pub fn culture_from_lookup<F>(lookup: F) -> Option<Culture>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = LOCALE_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())?;

    Culture::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn strips_encoding_and_uses_dashes() {
        let culture = Culture::parse("en_US.UTF-8").unwrap();
        assert_eq!(culture.name(), "en-US");
        assert_eq!(culture.language(), "en");
        assert_eq!(culture.region(), Some("US"));
    }

    #[test]
    fn encoding_suffix_takes_modifier_with_it() {
        assert_eq!(Culture::parse("de_DE.UTF-8@euro").unwrap().name(), "de-DE");
    }

    #[test]
    fn rejects_empty_posix_and_malformed() {
        assert_eq!(Culture::parse(""), None);
        assert_eq!(Culture::parse("C"), None);
        assert_eq!(Culture::parse("C.UTF-8"), None);
        assert_eq!(Culture::parse("POSIX"), None);
        assert_eq!(Culture::parse("de_DE@euro"), None);
        assert_eq!(Culture::parse("x"), None);
        assert_eq!(Culture::parse(".UTF-8"), None);
    }

    #[test]
    fn language_only_culture_has_no_region() {
        let culture = Culture::parse("fr").unwrap();
        assert_eq!(culture.region(), None);
        assert_eq!(culture.catalog_names(), vec!["fr".to_string()]);
    }

    #[test]
    fn catalog_names_fall_back_to_language() {
        let culture = Culture::parse("zh_CN.GB18030").unwrap();
        assert_eq!(culture.catalog_names(), vec!["zh_CN".to_string(), "zh".to_string()]);
    }

    #[test]
    fn lc_all_wins_over_lang() {
        let lookup = lookup_from(&[("LC_ALL", "de_AT.UTF-8"), ("LANG", "fr_FR.UTF-8")]);
        assert_eq!(culture_from_lookup(lookup).unwrap().name(), "de-AT");
    }

    #[test]
    fn empty_lc_all_falls_back_to_lang() {
        let lookup = lookup_from(&[("LC_ALL", ""), ("LANG", "fr_FR")]);
        assert_eq!(culture_from_lookup(lookup).unwrap().name(), "fr-FR");
    }

    #[test]
    fn unset_variables_mean_no_culture() {
        assert_eq!(culture_from_lookup(lookup_from(&[])), None);
        assert_eq!(culture_from_lookup(lookup_from(&[("LANG", "")])), None);
    }

    #[test]
    fn malformed_lc_all_does_not_consult_lang() {
        let lookup = lookup_from(&[("LC_ALL", "not a locale"), ("LANG", "fr_FR")]);
        assert_eq!(culture_from_lookup(lookup), None);
    }
}
