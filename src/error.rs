use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("Message catalog '{domain}' not found: locale directory {} does not exist", .locale_dir.display())]
    CatalogNotFound { domain: String, locale_dir: PathBuf },

    #[error("Failed to parse message catalog {}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: gettext::Error,
    },

    #[error("Logging setup failed")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HelloError>;
