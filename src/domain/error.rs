use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("unsupported content format `{extension}` (expected `json` or `toml`)")]
    UnsupportedFormat { extension: String },
    #[error("failed to parse {format} content: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    #[error("unknown color theme `{value}`")]
    UnknownColorTheme { value: String },
}

impl ContentError {
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }
}
