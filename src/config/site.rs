use crate::utils::error::{PageGenError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONTACT_EMAIL: &str = "hello@example.com";

/// Site-wide settings shared by every generated page. Loaded from a TOML
/// file only when `--site-config` is passed; otherwise the defaults apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

fn default_contact_email() -> String {
    DEFAULT_CONTACT_EMAIL.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: default_contact_email(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageGenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PageGenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("contact_email", &self.contact_email)
    }
}
