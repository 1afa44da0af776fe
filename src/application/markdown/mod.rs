//! Markdown to block HTML for job descriptions.

mod config;

use std::sync::Arc;

use comrak::{Arena, format_html, parse_document};
use once_cell::sync::Lazy;

use crate::application::render::RenderError;

use config::{build_sanitizer, default_options};

/// Converts markdown into block-level HTML. Implementations must be pure and
/// deterministic.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Comrak-based markdown rendering with optional Ammonia sanitisation.
pub struct ComrakMarkdownRenderer {
    options: comrak::Options<'static>,
    sanitizer: Option<ammonia::Builder<'static>>,
}

impl ComrakMarkdownRenderer {
    pub fn sanitized() -> Self {
        Self {
            options: default_options(),
            sanitizer: Some(build_sanitizer()),
        }
    }

    /// Skips sanitisation; raw HTML in the source is emitted as-is.
    pub fn unsanitized() -> Self {
        Self {
            options: default_options(),
            sanitizer: None,
        }
    }
}

impl Default for ComrakMarkdownRenderer {
    fn default() -> Self {
        Self::sanitized()
    }
}

impl MarkdownRenderer for ComrakMarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);

        let mut html = String::new();
        format_html(root, &self.options, &mut html).map_err(|err| RenderError::Markdown {
            message: err.to_string(),
        })?;

        let html = match &self.sanitizer {
            Some(sanitizer) => sanitizer.clean(&html).to_string(),
            None => html,
        };

        Ok(html.trim_end().to_string())
    }
}

static SANITIZED: Lazy<Arc<ComrakMarkdownRenderer>> =
    Lazy::new(|| Arc::new(ComrakMarkdownRenderer::sanitized()));

static UNSANITIZED: Lazy<Arc<ComrakMarkdownRenderer>> =
    Lazy::new(|| Arc::new(ComrakMarkdownRenderer::unsanitized()));

/// Access a shared renderer instance, initialised on first use.
pub fn markdown_renderer(sanitize: bool) -> Arc<ComrakMarkdownRenderer> {
    if sanitize {
        Arc::clone(&SANITIZED)
    } else {
        Arc::clone(&UNSANITIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_renders_as_block() {
        let html = markdown_renderer(true)
            .render("**bold**")
            .expect("render succeeds");

        assert_eq!(html, "<p><strong>bold</strong></p>");
    }

    #[test]
    fn lists_and_strikethrough_are_supported() {
        let html = markdown_renderer(true)
            .render("- Rust\n- ~~Perl~~\n")
            .expect("render succeeds");

        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Rust</li>"));
        assert!(html.contains("<del>Perl</del>"));
    }

    #[test]
    fn sanitisation_can_be_disabled() {
        let source = "<div class=\"perk\">Free lunch</div>";

        let sanitized = markdown_renderer(true).render(source).expect("render");
        let raw = markdown_renderer(false).render(source).expect("render");

        assert!(!sanitized.contains("<div"));
        assert!(sanitized.contains("Free lunch"));
        assert!(raw.contains("<div class=\"perk\">Free lunch</div>"));
    }
}
