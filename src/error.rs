//! Error types for parish triage.

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Knowledge base loading errors.
///
/// `KnowledgeBaseLoader::load_tier` never returns these; they surface only
/// through `try_load_tier` and the per-tier stats.
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    #[error("KB sheet name not configured for tier: {tier}")]
    Configuration { tier: String },

    #[error("KB sheet not found: {sheet}")]
    NotFound { sheet: String },

    #[error("KB source error: {0}")]
    Source(SourceError),

    #[error("KB cache error: {0}")]
    Cache(#[from] CacheError),
}

impl From<SourceError> for KbError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound { sheet } => KbError::NotFound { sheet },
            other => KbError::Source(other),
        }
    }
}

/// Tabular content source errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Sheet not found: {sheet}")]
    NotFound { sheet: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Cache store errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Value for {key} exceeded maximum size: {size} > {max} bytes")]
    ValueTooLarge { key: String, size: usize, max: usize },
}
