#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("Data source not found: {0}")]
    NotFound(String),

    #[error("Malformed data source: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DataSourceError {
    fn from(e: serde_json::Error) -> Self {
        DataSourceError::Malformed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataSourceError>;
