use thiserror::Error;

/// Failure reading or writing a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
