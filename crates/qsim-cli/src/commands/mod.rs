//! CLI command implementations.

pub mod common;
pub mod export;
pub mod presets;
pub mod run;
pub mod stats;
pub mod version;
