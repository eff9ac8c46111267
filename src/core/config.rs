//! Match configuration with documented defaults
//!
//! Values can be overridden from a TOML file. Missing sections and fields
//! fall back to the defaults below, so an empty file is a valid config.

use crate::combat::constants::GRID_SIZE;
use crate::core::error::{ClashError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings that shape how a match is played
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Seed for the opponent selector and flavor quotes
    ///
    /// `None` seeds from entropy. Set it to replay a match exactly.
    pub seed: Option<u64>,

    /// Starting cell for side 1 (faces right)
    pub p1_start: i32,

    /// Starting cell for side 2 (faces left)
    pub p2_start: i32,

    /// Pause between phases while a turn is being presented (milliseconds)
    ///
    /// Pacing only. The engine never waits.
    pub phase_delay_ms: u64,

    /// Turn limit for headless runs before the match is called a draw
    pub max_turns: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            seed: None,
            p1_start: 1,
            p2_start: GRID_SIZE - 1,
            phase_delay_ms: 0,
            max_turns: 50,
        }
    }
}

/// Settings for the panel renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Whether to request panel artwork at all
    pub enabled: bool,

    /// Endpoint base for the image model
    pub api_url: String,

    /// Image model name
    pub model: String,

    /// Longest wait for one panel before the phase goes on without it
    /// (milliseconds)
    pub timeout_ms: u64,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-2.5-flash-image".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Complete configuration for a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default, rename = "match")]
    pub rules: MatchSettings,
    #[serde(default)]
    pub renderer: RendererSettings,
}

impl MatchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let on_grid = |p: i32| (0..=GRID_SIZE).contains(&p);
        if !on_grid(self.rules.p1_start) || !on_grid(self.rules.p2_start) {
            return Err(format!(
                "start positions ({}, {}) must lie within 0..={}",
                self.rules.p1_start, self.rules.p2_start, GRID_SIZE
            ));
        }

        // Side 1 faces right, so it has to start left of side 2
        if self.rules.p1_start >= self.rules.p2_start {
            return Err(format!(
                "p1_start ({}) must be left of p2_start ({})",
                self.rules.p1_start, self.rules.p2_start
            ));
        }

        if self.rules.max_turns == 0 {
            return Err("max_turns must be at least 1".into());
        }

        if self.renderer.timeout_ms == 0 {
            return Err("renderer timeout_ms must be at least 1".into());
        }

        Ok(())
    }
}

/// Parse and validate a config from TOML text
pub fn parse_config(content: &str) -> Result<MatchConfig> {
    let config: MatchConfig = toml::from_str(content)?;
    config.validate().map_err(ClashError::Config)?;
    Ok(config)
}

/// Load config from a TOML file
pub fn load_config(path: &Path) -> Result<MatchConfig> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Loaded match config");
    Ok(config)
}
