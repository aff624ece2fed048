use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language codes following ISO 639-1 with regional variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(pub String);

impl Lang {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Lang {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Lang {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Translation provider selected by the user.
///
/// An opaque identifier forwarded to the backend; the providers themselves
/// are not implemented client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    #[default]
    Google,
    Openai,
}

impl Service {
    /// Wire identifier sent to the backend (`"google"` / `"openai"`).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Openai => "openai",
        }
    }

    /// Human-readable label for the service selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google Translate",
            Self::Openai => "OpenAI GPT",
        }
    }

    /// Parse a backend-advertised service identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "google" => Some(Self::Google),
            "openai" => Some(Self::Openai),
            _ => None,
        }
    }

    /// All services this client knows how to offer.
    pub const fn all() -> [Self; 2] {
        [Self::Google, Self::Openai]
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Supported-language catalog: language code mapped to display name.
///
/// Fetched once from the backend, read-only thereafter, replaced wholesale
/// on refetch. A BTreeMap keeps the selector ordering deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog(pub BTreeMap<String, String>);

impl LanguageCatalog {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Iterate `(code, name)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    /// First catalog code, used as the default selection.
    pub fn first_code(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for LanguageCatalog {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Backend configuration for the external translation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base address of the translation backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout in seconds (no retry policy exists on top of it)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend the view talks to
    #[serde(default)]
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::error::Error::ConfigLoad(format!("Failed to parse config: {e}"))
        })
    }

    /// Load from ./config.toml when present, else defaults.
    pub fn load() -> Self {
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}

/// Default target language code
pub const DEFAULT_TARGET_LANG: &str = "es";
