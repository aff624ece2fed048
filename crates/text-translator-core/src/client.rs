use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{BackendConfig, Lang, LanguageCatalog, Service};
use crate::error::{Error, Result};

/// HTTP client for the external translation backend.
///
/// Consumes exactly two endpoints: `GET {base}/languages` and
/// `POST {base}/translate`. There is deliberately no retry or cancellation
/// layer on top of the transport; each call is a single suspension point and
/// failures are terminal for that call only.
pub struct BackendClient {
    client: Client,
    /// Base URL of the backend (e.g., "http://localhost:5000")
    base_url: String,
}

/// What the language-listing endpoint advertises.
#[derive(Debug, Clone, Default)]
pub struct CatalogListing {
    /// Supported target languages, possibly empty.
    pub languages: LanguageCatalog,
    /// Services the backend is willing to serve.
    pub services: Vec<Service>,
}

/// One translation submission, built fresh per user action.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_lang: Lang,
    pub service: Service,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    languages: LanguageCatalog,
    /// Advertised provider ids; absent on older backends.
    services: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

impl BackendClient {
    /// Create a client for the configured backend.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which should only happen
    /// in extreme circumstances (e.g., TLS backend unavailable on the system).
    #[allow(clippy::expect_used)]
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the supported-language catalog. One-shot; no retry.
    ///
    /// Any failure (network, non-2xx, malformed body) collapses into
    /// [`Error::LanguageFetch`] with its fixed message; the cause is logged.
    pub async fn fetch_languages(&self) -> Result<CatalogListing> {
        let url = format!("{}/languages", self.base_url);
        debug!("Fetching language catalog from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Language catalog request failed: {}", e);
            Error::LanguageFetch
        })?;

        if !response.status().is_success() {
            warn!("Language catalog request returned {}", response.status());
            return Err(Error::LanguageFetch);
        }

        let listing = response.json::<LanguagesResponse>().await.map_err(|e| {
            warn!("Malformed language catalog response: {}", e);
            Error::LanguageFetch
        })?;

        debug!("Catalog loaded: {} languages", listing.languages.len());
        Ok(catalog_listing(listing))
    }

    /// Submit one translation request.
    ///
    /// Non-2xx responses surface the body's `error` field when parseable,
    /// else the generic "Translation failed" message. Unrecognized target
    /// codes are forwarded untouched; validating them is the backend's
    /// concern.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let url = format!("{}/translate", self.base_url);
        debug!(
            "Translating {} bytes to '{}' via {}",
            request.text.len(),
            request.target_lang,
            request.service
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Translation request failed: {}", e);
                Error::translation_failed()
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response.json::<TranslateResponse>().await.map_err(|e| {
                warn!("Malformed translation response: {}", e);
                Error::translation_failed()
            })?;
            return Ok(body.translated_text);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Translation request returned {}: {}", status, body);
        Err(translation_error_from_body(&body))
    }
}

/// Convert the wire listing into the domain type, defaulting to every known
/// service when the backend does not advertise any.
fn catalog_listing(response: LanguagesResponse) -> CatalogListing {
    let services = response.services.map_or_else(
        || Service::all().to_vec(),
        |ids| ids.iter().filter_map(|id| Service::from_id(id)).collect(),
    );

    CatalogListing {
        languages: response.languages,
        services,
    }
}

/// Extract a human-readable message from an error response body.
///
/// Falls back to the generic message when the body is not JSON or carries
/// no `error` field.
fn translation_error_from_body(body: &str) -> Error {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .map_or_else(Error::translation_failed, Error::Translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_listing(json: &str) -> CatalogListing {
        catalog_listing(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_languages_response_parsing() {
        let listing = parse_listing(r#"{"languages":{"es":"Spanish","fr":"French"}}"#);
        assert_eq!(listing.languages.len(), 2);
        assert!(listing.languages.contains("es"));
        assert!(listing.languages.contains("fr"));
    }

    #[test]
    fn test_missing_languages_field_is_empty_catalog() {
        let listing = parse_listing("{}");
        assert!(listing.languages.is_empty());
    }

    #[test]
    fn test_services_default_to_all_when_absent() {
        let listing = parse_listing(r#"{"languages":{}}"#);
        assert_eq!(listing.services, [Service::Google, Service::Openai]);
    }

    #[test]
    fn test_advertised_services_restrict_offering() {
        let listing = parse_listing(r#"{"languages":{},"services":["google"]}"#);
        assert_eq!(listing.services, [Service::Google]);
    }

    #[test]
    fn test_unknown_advertised_services_are_skipped() {
        let listing = parse_listing(r#"{"languages":{},"services":["google","deepl"]}"#);
        assert_eq!(listing.services, [Service::Google]);
    }

    #[test]
    fn test_error_body_with_message() {
        let err = translation_error_from_body(r#"{"error":"rate limited"}"#);
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_error_body_unparseable_falls_back() {
        assert_eq!(
            translation_error_from_body("<html>502</html>").to_string(),
            "Translation failed"
        );
        assert_eq!(translation_error_from_body("").to_string(), "Translation failed");
    }

    #[test]
    fn test_error_body_without_error_field_falls_back() {
        assert_eq!(
            translation_error_from_body(r#"{"status":"bad"}"#).to_string(),
            "Translation failed"
        );
    }

    #[test]
    fn test_request_wire_format() {
        let request = TranslationRequest {
            text: "Hello".to_string(),
            target_lang: Lang::new("es"),
            service: Service::Google,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text":"Hello","target_lang":"es","service":"google"})
        );
    }
}
