//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::repeat::RepeatConfig;

use super::AppPaths;

// ---------------------------------------------------------------------------
// RepeatSettings
// ---------------------------------------------------------------------------

/// Long-press repeat timing, in milliseconds.
///
/// The serialisable counterpart of [`RepeatConfig`]; convert with
/// [`to_config`](Self::to_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatSettings {
    /// Delay before a held key starts repeating.
    pub initial_delay_ms: u64,
    /// Interval between repeats once the delay has elapsed.
    pub interval_ms: u64,
}

impl RepeatSettings {
    /// Convert to the duration-based config the scheduler consumes.
    pub fn to_config(&self) -> RepeatConfig {
        RepeatConfig::from_millis(self.initial_delay_ms, self.interval_ms)
    }
}

impl Default for RepeatSettings {
    fn default() -> Self {
        Self {
            initial_delay_ms: 400,
            interval_ms: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// RecognitionSettings
// ---------------------------------------------------------------------------

/// Settings for the handwriting recognition session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionSettings {
    /// Maximum number of candidates kept from one recognition result.
    pub max_candidates: usize,
    /// Submit for recognition automatically on every draw-end, rather than
    /// waiting for an explicit host trigger.
    pub auto_submit: bool,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            max_candidates: 8,
            auto_submit: true,
        }
    }
}

// ---------------------------------------------------------------------------
// KeyboardConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level keyboard configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use inkboard::config::KeyboardConfig;
///
/// // Load (returns Default when file is missing)
/// let config = KeyboardConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Long-press repeat timing.
    pub repeat: RepeatSettings,
    /// Handwriting recognition settings.
    pub recognition: RecognitionSettings,
}

impl KeyboardConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(KeyboardConfig::default())` when the file does not exist
    /// yet (first-run scenario) so callers never need to special-case a
    /// missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
