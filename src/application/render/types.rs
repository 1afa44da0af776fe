use thiserror::Error;

use crate::domain::jobs::ColorTheme;
use crate::presentation::views::TemplateRenderError;

/// Knobs applied to every render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit `data-sb-field-path` annotations for visual editing tooling.
    pub field_paths: bool,
    /// Sanitise HTML produced from markdown descriptions.
    pub sanitize: bool,
    /// Theme used when the section does not name one.
    pub default_colors: ColorTheme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            field_paths: true,
            sanitize: true,
            default_colors: ColorTheme::default(),
        }
    }
}

impl From<&crate::config::RenderSettings> for RenderOptions {
    fn from(settings: &crate::config::RenderSettings) -> Self {
        Self {
            field_paths: settings.field_paths,
            sanitize: settings.sanitize,
            default_colors: settings.default_colors,
        }
    }
}

/// Structured errors surfaced by the rendering pipeline. Missing content is
/// never an error; these cover collaborator failures only.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("markdown rendering failed: {message}")]
    Markdown { message: String },
    #[error("{0} in `{origin}`", origin = .0.origin())]
    Template(#[from] TemplateRenderError),
}
