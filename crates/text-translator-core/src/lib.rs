//! Text Translator Core Library
//!
//! This library provides the client-side core of the translator view:
//! - HTTP client for the external translation backend
//! - Language catalog and service/provider types
//! - The view's exclusive state machine
//! - Configuration loading

pub mod client;
pub mod config;
pub mod error;
pub mod view;

pub use client::{BackendClient, CatalogListing, TranslationRequest};
pub use config::{
    AppConfig, BackendConfig, Lang, LanguageCatalog, Service, DEFAULT_TARGET_LANG,
};
pub use error::{Error, Result};
pub use view::{TranslatorView, ViewState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:5000");
    }
}
