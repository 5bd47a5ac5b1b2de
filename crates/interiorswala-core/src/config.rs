//! Studio configuration loaded from the environment (`.env` is loaded by the binary).
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | API_KEY / VITE_API_KEY | unset | Generative design service credential. |
//! | STUDIO_AI_MODEL | gemini-3-flash-preview | Model used for design suggestions. |
//! | STUDIO_AI_BASE_URL | https://generativelanguage.googleapis.com | Service base URL. |
//! | STUDIO_AI_TIMEOUT_SECS | 30 | Upper bound on one suggestion request (1..=300). |
//! | STUDIO_DATA_PATH | ./data/interiorswala_vault | Sled vault directory. |
//! | STUDIO_ADMIN_USER / STUDIO_ADMIN_PASSWORD | admin / admin1234 | Placeholder admin pair. |

use crate::access_gate::StaticCredentialVerifier;
use crate::storage::DEFAULT_VAULT_PATH;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub data_path: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_path: PathBuf::from(DEFAULT_VAULT_PATH),
            admin_username: "admin".to_string(),
            admin_password: "admin1234".to_string(),
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let opt = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();
        let timeout_secs = opt("STUDIO_AI_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(1, 300);
        Self {
            api_key: opt("API_KEY").or_else(|| opt("VITE_API_KEY")),
            model: opt("STUDIO_AI_MODEL").unwrap_or(defaults.model),
            api_base: opt("STUDIO_AI_BASE_URL").unwrap_or(defaults.api_base),
            request_timeout: Duration::from_secs(timeout_secs),
            data_path: opt("STUDIO_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            admin_username: opt("STUDIO_ADMIN_USER").unwrap_or(defaults.admin_username),
            admin_password: opt("STUDIO_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        }
    }

    pub fn credential_verifier(&self) -> StaticCredentialVerifier {
        StaticCredentialVerifier::new(&self.admin_username, &self.admin_password)
    }
}
