//! Application services: style resolution, markdown and section rendering.

pub mod actions;
pub mod classes;
pub mod error;
pub mod markdown;
pub mod render;
pub mod styles;
