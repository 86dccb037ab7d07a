use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid price {price}: must be finite and non-negative")]
    InvalidPrice { price: f64 },

    #[error("Unknown sort field '{value}'")]
    UnknownSortField { value: String },

    #[error("Unknown sort order '{value}'")]
    UnknownSortOrder { value: String },

    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
