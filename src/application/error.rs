use std::error::Error as StdError;

use thiserror::Error;

use crate::{application::render::RenderError, config::LoadError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    /// The error message followed by every message in its source chain.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut current = self.source();
        while let Some(inner) = current {
            let message = inner.to_string();
            if messages.last() != Some(&message) {
                messages.push(message);
            }
            current = inner.source();
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ContentError;

    #[test]
    fn messages_walk_the_source_chain() {
        let error = AppError::from(InfraError::content(
            "jobs.yaml",
            ContentError::unsupported_format("yaml"),
        ));

        let messages = error.messages();
        assert_eq!(messages[0], "failed to load content from `jobs.yaml`");
        assert_eq!(
            messages.last().map(String::as_str),
            Some("unsupported content format `yaml` (expected `json` or `toml`)")
        );
    }
}
