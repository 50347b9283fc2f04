use crate::error::{HelloError, Result as HelloResult};
use crate::locale::Culture;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// 默认的消息目录名（gettext domain）
pub const DEFAULT_DOMAIN: &str = "hello-rust";

/// 默认的 locale 目录：构建时设置了 `HELLO_LOCALEDIR` 则使用它（安装路径），
/// 否则使用源码树中随程序发布的 `locale/`
pub const DEFAULT_LOCALE_DIR: &str = match option_env!("HELLO_LOCALEDIR") {
    Some(dir) => dir,
    None => concat!(env!("CARGO_MANIFEST_DIR"), "/locale"),
};

/// 源代码中消息所用的语言，找不到该语言的目录时直接使用原文
pub const SOURCE_LANGUAGE: &str = "en";

/// `<locale_dir>/<name>/LC_MESSAGES/<domain>.mo`
pub fn catalog_path(locale_dir: &Path, name: &str, domain: &str) -> PathBuf {
    locale_dir
        .join(name)
        .join("LC_MESSAGES")
        .join(format!("{domain}.mo"))
}

/// 已加载的消息目录，创建后只读
pub struct Catalog {
    domain: String,
    culture: Option<Culture>,
    path: Option<PathBuf>,
    inner: gettext::Catalog,
}

impl Catalog {
    /// 按区域打开指定 domain 的消息目录
    ///
    /// locale 目录本身不存在时返回 [`HelloError::CatalogNotFound`]。
    /// 之后依次尝试 `culture.catalog_names()` 中的目录，第一个存在的文件生效；
    /// 没有区域或该区域没有翻译文件时，返回保留区域信息、但不含翻译的目录。
    pub fn open(domain: &str, locale_dir: &Path, culture: Option<&Culture>) -> HelloResult<Self> {
        if !locale_dir.is_dir() {
            return Err(HelloError::CatalogNotFound {
                domain: domain.to_string(),
                locale_dir: locale_dir.to_path_buf(),
            });
        }

        let Some(culture) = culture else {
            tracing::debug!(domain, "no locale set, using untranslated messages");
            return Ok(Self::untranslated(domain));
        };

        let searched: Vec<PathBuf> = culture
            .catalog_names()
            .iter()
            .map(|name| catalog_path(locale_dir, name, domain))
            .collect();

        match searched.iter().find(|path| path.is_file()) {
            Some(path) => Self::load(domain, culture, path),
            None if culture.language() == SOURCE_LANGUAGE => {
                tracing::debug!(domain, %culture, "source language, using untranslated messages");
                Ok(Self::untranslated(domain).with_culture(culture))
            }
            None => {
                tracing::info!(
                    domain,
                    %culture,
                    searched = ?searched,
                    "no translation for locale, using untranslated messages"
                );
                Ok(Self::untranslated(domain).with_culture(culture))
            }
        }
    }

    /// 不含任何翻译的目录，查找结果总是原文
    pub fn untranslated(domain: &str) -> Self {
        Catalog {
            domain: domain.to_string(),
            culture: None,
            path: None,
            inner: gettext::Catalog::empty(),
        }
    }

    fn with_culture(mut self, culture: &Culture) -> Self {
        self.culture = Some(culture.clone());
        self
    }

    fn load(domain: &str, culture: &Culture, path: &Path) -> HelloResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let inner = gettext::Catalog::parse(reader).map_err(|source| HelloError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(domain, %culture, path = %path.display(), "loaded message catalog");

        Ok(Catalog {
            domain: domain.to_string(),
            culture: Some(culture.clone()),
            path: Some(path.to_path_buf()),
            inner,
        })
    }

    /// 查找译文，没有翻译时返回原文
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        let translated = self.inner.gettext(key);
        if std::ptr::eq(translated, key) {
            tracing::trace!(key, "no translation, using source text");
        }
        translated
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn culture(&self) -> Option<&Culture> {
        self.culture.as_ref()
    }

    /// 实际加载的 `.mo` 文件，未加载文件时为 `None`
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
