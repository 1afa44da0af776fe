//! Renders a jobs listing content section (title, subtitle, categories of job
//! items with markdown descriptions and call-to-action buttons) into styled,
//! field-path annotated HTML.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

pub use application::render::{JobsSectionRenderer, RenderError, RenderOptions};
pub use domain::jobs::{JobCategory, JobItem, JobsSection};
pub use infra::content::load_section;
