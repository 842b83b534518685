use thiserror::Error;

/// Why a data file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse ledger {path}: {message}")]
    Ledger { path: String, message: String },
}

impl LoadError {
    /// Location of the file that failed.
    pub fn location(&self) -> &str {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Json { path, .. }
            | LoadError::Ledger { path, .. } => path,
            LoadError::Fetch { url, .. } => url,
        }
    }
}
