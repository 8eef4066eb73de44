//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Course label applied by `assignment add` when `--course` is omitted.
    #[serde(default)]
    pub default_course: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_course: String::new(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// The configured default course, if any.
    #[must_use]
    pub fn default_course(&self) -> Option<&str> {
        let course = self.default_course.trim();
        (!course.is_empty()).then_some(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.default_course.is_empty());
        assert_eq!(config.default_course(), None);
        assert_eq!(config.default_limit, 20);
    }

    #[test]
    fn blank_default_course_is_ignored() {
        let config = GeneralConfig {
            default_course: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.default_course(), None);
    }
}
