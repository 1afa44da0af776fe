//! Domain layer: the jobs section content model.

pub mod actions;
pub mod error;
pub mod jobs;
pub mod styles;
