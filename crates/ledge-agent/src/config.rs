//! Agent configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use ledge_core::CharacterKind;
use ledge_nav::GraphLayout;
use serde::{Deserialize, Serialize};

/// Per-character movement constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlProfile {
    /// Highest rise the character can make in one move (jump or morph height).
    pub max_vertical_distance: f32,
    /// Horizontal half-width of the "waypoint reached" box.
    pub x_margin: f32,
    /// Vertical half-height of the "waypoint reached" box.
    pub y_margin: f32,
    /// Minimum rise to the next waypoint before ascending is considered.
    pub above_margin: f32,
    /// Horizontal distance to the next waypoint within which the character ascends.
    pub ascend_window: f32,
}

impl ControlProfile {
    pub fn circle() -> Self {
        Self {
            max_vertical_distance: 200.0,
            x_margin: 10.0,
            y_margin: 50.0,
            above_margin: 70.0,
            ascend_window: 200.0,
        }
    }

    pub fn rectangle() -> Self {
        Self {
            max_vertical_distance: 70.0,
            x_margin: 70.0,
            y_margin: 50.0,
            above_margin: 70.0,
            ascend_window: 200.0,
        }
    }

    pub fn for_character(kind: CharacterKind) -> Self {
        match kind {
            CharacterKind::Circle => Self::circle(),
            CharacterKind::Rectangle => Self::rectangle(),
        }
    }
}

/// Agent configuration, usually loaded from `agent.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub character: CharacterKind,

    /// Seed for the random fallback move generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Overrides the built-in profile of `character` when present.
    pub profile: Option<ControlProfile>,

    pub layout: GraphLayout,
}

fn default_seed() -> u64 {
    0x5EED
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            character: CharacterKind::default(),
            seed: default_seed(),
            profile: None,
            layout: GraphLayout::default(),
        }
    }
}

impl AgentConfig {
    pub fn for_character(character: CharacterKind) -> Self {
        Self {
            character,
            ..Self::default()
        }
    }

    /// The effective profile: the override if configured, else the character's built-in one.
    pub fn profile(&self) -> ControlProfile {
        self.profile
            .unwrap_or_else(|| ControlProfile::for_character(self.character))
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read agent config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse agent config from {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize agent config")
    }
}
