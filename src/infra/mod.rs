//! Infrastructure adapters: content loading and runtime bootstrap.

pub mod content;
pub mod error;
pub mod telemetry;
