use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::ContentError;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load content from `{}`", path.display())]
    Content {
        path: PathBuf,
        #[source]
        source: ContentError,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl InfraError {
    pub fn content(path: impl Into<PathBuf>, source: ContentError) -> Self {
        Self::Content {
            path: path.into(),
            source,
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
