pub mod catalog;
pub mod commands;
pub mod error;
pub mod format;
pub mod i18n;
pub mod locale;
pub mod logging;

#[cfg(test)]
pub(crate) mod test_utils;

pub use catalog::{Catalog, DEFAULT_DOMAIN, DEFAULT_LOCALE_DIR};
pub use commands::CommandContext;
pub use error::{HelloError, Result};
pub use locale::Culture;
