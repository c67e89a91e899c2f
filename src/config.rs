use crate::error::Result;
use crate::lesson::Lesson;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Run settings, read from TOML. Every field is optional.
///
/// ```toml
/// lesson = "map-delete"
/// name = "Jo"
/// times = 6
/// capacity = 2
/// settle_ms = 100
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub lesson: Lesson,
    /// Looked up by the map and switch lessons.
    pub name: String,
    /// Iterations for the loop lessons.
    pub times: usize,
    /// Channel capacity for `handoff`; 0 means rendezvous.
    pub capacity: usize,
    /// Sleep used where a lesson synchronises by waiting.
    pub settle_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lesson: Lesson::SwitchType,
            name: "Jo".to_string(),
            times: 3,
            capacity: 0,
            settle_ms: 100,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), lesson = %config.lesson, "loaded config");
        Ok(config)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}
