use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Start each session with the four sample tasks
    #[serde(default = "default_true")]
    pub seed_samples: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { seed_samples: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides for the light palette, keyed by palette field name
    #[serde(default)]
    pub light: HashMap<String, String>,
    /// Hex color overrides for the dark palette
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            light: HashMap::new(),
            dark: HashMap::new(),
        }
    }
}
