//! API key resolution: secrets file first, then the environment.
//!
//! Absence is not an error. Callers receive `None` and run in degraded mode.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Placeholder older deployments wrote into their secrets instead of a key.
const UNSET_SENTINEL: &str = "KEY_NOT_SET";

/// Opaque provider API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank values and the unset sentinel.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == UNSET_SENTINEL {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// Resolves the credential from `secrets_path`, falling back to `GEMINI_API_KEY`.
pub fn resolve_credential(secrets_path: &Path) -> Option<Credential> {
    resolve_from(secrets_path, std::env::var(API_KEY_VAR).ok())
}

fn resolve_from(secrets_path: &Path, env_value: Option<String>) -> Option<Credential> {
    if let Some(credential) = read_secrets_file(secrets_path) {
        debug!("API key loaded from {}", secrets_path.display());
        return Some(credential);
    }

    if let Some(credential) = env_value.and_then(Credential::new) {
        debug!("API key loaded from {API_KEY_VAR}");
        return Some(credential);
    }

    warn!(
        "No API key found in {} or {API_KEY_VAR}; generation is disabled",
        secrets_path.display()
    );
    None
}

fn read_secrets_file(path: &Path) -> Option<Credential> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("Secrets file {} not readable: {e}", path.display());
            return None;
        }
    };

    match toml::from_str::<SecretsFile>(&contents) {
        Ok(secrets) => secrets.gemini_api_key.and_then(Credential::new),
        Err(e) => {
            warn!("Secrets file {} is not valid TOML: {e}", path.display());
            None
        }
    }
}
