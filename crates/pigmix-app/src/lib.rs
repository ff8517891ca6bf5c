//! Pigmix application layer: configuration, subcommands and rendering.

pub mod commands;
pub mod config;
pub mod render;

pub use commands::{LutSummary, MixReport};
pub use config::AppConfig;
