//! Configuration module for the keyboard interaction engine.
//!
//! Provides `KeyboardConfig` (top-level settings), sub-configs for the
//! repeat and recognition subsystems, `AppPaths` for cross-platform config
//! directories, and TOML persistence via `KeyboardConfig::load` /
//! `KeyboardConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{KeyboardConfig, RecognitionSettings, RepeatSettings};
