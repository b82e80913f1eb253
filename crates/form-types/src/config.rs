use serde::{Deserialize, Serialize};

use crate::error::FormError;

fn enabled() -> bool {
    true
}

/// Behaviour switches for a form store.
///
/// Loaded from the `[form]` table of a TOML document. Missing keys fall back
/// to the defaults below, so an empty document is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// Re-run the caller's validator after every field write.
    #[serde(default = "enabled")]
    pub validate_on_change: bool,
    /// Re-run the caller's validator when a field is marked touched.
    #[serde(default = "enabled")]
    pub validate_on_blur: bool,
    /// Mark a field touched as soon as its value changes.
    #[serde(default)]
    pub touch_on_change: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            validate_on_change: true,
            validate_on_blur: true,
            touch_on_change: false,
        }
    }
}

/// Top-level config document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormsConfig {
    #[serde(default)]
    pub form: FormConfig,
}

impl FormsConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, FormError> {
        Ok(toml::from_str(source)?)
    }
}
