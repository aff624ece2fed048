use thiserror::Error;

/// Unified error type for text-translator-core.
///
/// Only two user-visible failure kinds exist: the one-shot language catalog
/// fetch and the translation request itself. Everything carried in these
/// variants is display-ready; transport-level detail is logged at the call
/// site instead of being surfaced to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// The language-listing request failed (network, non-2xx, or malformed
    /// body). Always rendered with the same fixed message.
    #[error("Failed to fetch supported languages")]
    LanguageFetch,

    /// The translate request failed. Carries the backend-provided message
    /// when one was parseable, else the generic fallback.
    #[error("{0}")]
    Translation(String),

    /// Failed to load or parse a configuration file.
    #[error("failed to load config: {0}")]
    ConfigLoad(String),
}

impl Error {
    /// Generic fallback used when an error response has no parseable body.
    pub fn translation_failed() -> Self {
        Self::Translation("Translation failed".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_fetch_message_is_fixed() {
        assert_eq!(
            Error::LanguageFetch.to_string(),
            "Failed to fetch supported languages"
        );
    }

    #[test]
    fn test_translation_message_passthrough() {
        assert_eq!(
            Error::Translation("rate limited".to_string()).to_string(),
            "rate limited"
        );
        assert_eq!(Error::translation_failed().to_string(), "Translation failed");
    }
}
