//! Domain error types.

/// Top-level error type for finguide.
///
/// Missing metrics and short price histories are not errors: scoring falls
/// back to the neutral score and return cells become `None`.
#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("{source_name} request failed: {reason}")]
    Upstream { source_name: String, reason: String },

    #[error("malformed {source_name} response: {reason}")]
    MalformedFeed { source_name: String, reason: String },

    #[error("no data for {ticker}")]
    NoData { ticker: String },

    #[error("insufficient data for {ticker}: have {observations} observations, need {minimum}")]
    InsufficientData {
        ticker: String,
        observations: usize,
        minimum: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GuideError {
    pub fn upstream(source_name: &str, reason: impl Into<String>) -> Self {
        GuideError::Upstream {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed(source_name: &str, reason: impl Into<String>) -> Self {
        GuideError::MalformedFeed {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&GuideError> for std::process::ExitCode {
    fn from(err: &GuideError) -> Self {
        let code: u8 = match err {
            GuideError::Io(_) => 1,
            GuideError::ConfigParse { .. }
            | GuideError::ConfigMissing { .. }
            | GuideError::ConfigInvalid { .. } => 2,
            GuideError::Upstream { .. } | GuideError::MalformedFeed { .. } => 3,
            GuideError::NoData { .. } | GuideError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
