use thiserror::Error;

/// Errors produced by the rendering pipeline.
///
/// Nothing is caught or retried internally; every variant propagates to the
/// caller unmodified.
#[derive(Debug, Error)]
pub enum GeoPlotError {
    /// A configured slash-path does not exist in a state snapshot.
    #[error("path '{path}' not found in state")]
    PathNotFound { path: String },

    /// A required configuration key is absent or has an unusable value.
    #[error("missing or invalid config key '{key}'")]
    ConfigKey { key: String },

    /// State data at a resolved path has a shape the encoder cannot use.
    #[error("malformed data at '{path}': {reason}")]
    MalformedData { path: String, reason: String },

    #[error("failed to serialize GeoJSON data")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output file")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeoPlotError>;
