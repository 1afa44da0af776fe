//! Jobs section rendering.
//!
//! Rendering is a pure projection of the content model: the same section and
//! options always produce identical HTML, and absent fields simply omit their
//! markup.

mod section;
mod types;

pub use section::JobsSectionRenderer;
pub use types::{RenderError, RenderOptions};
