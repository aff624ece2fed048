//! Askama templates for the translator view.
//!
//! ## HTMX Patterns Used
//!
//! - **Fragment swap**: the translate form targets `#output-area`; the
//!   response fragment carries the output textarea plus an OOB swap for the
//!   error banner.
//!
//! - **Disabled Elements**: `hx-disabled-elt` keeps the trigger button
//!   disabled while a request is outstanding, so a second concurrent
//!   submission cannot be issued from the page.
//!
//! ## Template Structure
//!
//! - `base.html` - Common layout with CSS/JS
//! - `index.html` - The single translator page
//! - `partials/translate_result.html` - Output + error banner fragment

use askama::Template;
use askama_web::WebTemplate;
use text_translator_core::TranslatorView;

/// One `<option>` in the target-language selector.
pub struct LanguageChoice {
    pub code: String,
    pub name: String,
    pub selected: bool,
}

/// One `<option>` in the service selector.
pub struct ServiceChoice {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The full translator page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub languages: Vec<LanguageChoice>,
    pub services: Vec<ServiceChoice>,
    pub input: String,
    pub output: String,
    pub error: Option<String>,
}

impl IndexTemplate {
    /// Render the page from the current view state.
    pub fn from_view(view: &TranslatorView) -> Self {
        let selected_lang = view.target_lang().as_str();
        let languages = view
            .catalog()
            .iter()
            .map(|(code, name)| LanguageChoice {
                code: code.to_string(),
                name: name.to_string(),
                selected: code == selected_lang,
            })
            .collect();

        let services = view
            .services()
            .iter()
            .map(|service| ServiceChoice {
                id: service.id(),
                label: service.label(),
                selected: *service == view.service(),
            })
            .collect();

        Self {
            languages,
            services,
            input: view.input().to_string(),
            output: view.output().to_string(),
            error: view.state().error_message().map(ToString::to_string),
        }
    }
}

/// Fragment returned by the translate endpoint.
///
/// Replaces the output area and OOB-updates the error banner, whether the
/// submission succeeded, failed, or was refused by the guard.
#[derive(Template, WebTemplate)]
#[template(path = "partials/translate_result.html")]
pub struct TranslateResultTemplate {
    pub output: String,
    pub error: Option<String>,
}

impl TranslateResultTemplate {
    /// Render the fragment from the current view state.
    pub fn from_view(view: &TranslatorView) -> Self {
        Self {
            output: view.output().to_string(),
            error: view.state().error_message().map(ToString::to_string),
        }
    }
}
