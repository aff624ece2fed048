use tracing::warn;

use crate::client::{CatalogListing, TranslationRequest};
use crate::config::{DEFAULT_TARGET_LANG, Lang, LanguageCatalog, Service};
use crate::error::Result;

/// Exclusive state of the translator view.
///
/// One discriminated value instead of independent loading/error flags, so
/// invalid combinations (translating and errored at once) are unreachable.
/// `Translating` and `Error` are only enterable after `LanguagesLoading`
/// has ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Blocking initial state while the catalog fetch is outstanding.
    #[default]
    LanguagesLoading,
    /// Interactive, no outstanding request, no error displayed.
    Ready,
    /// One translation request in flight; submission is disabled.
    Translating,
    /// Interactive, last operation failed with this display message.
    Error(String),
}

impl ViewState {
    pub const fn is_translating(&self) -> bool {
        matches!(self, Self::Translating)
    }

    pub const fn is_loading_languages(&self) -> bool {
        matches!(self, Self::LanguagesLoading)
    }

    /// Current error banner text, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// The single "Translator View": catalog, selections, latest result and the
/// exclusive [`ViewState`]. All fields are transient, held only for the
/// lifetime of the view; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct TranslatorView {
    catalog: LanguageCatalog,
    services: Vec<Service>,
    target_lang: Lang,
    service: Service,
    input: String,
    /// Latest translated text, overwritten by each successful request.
    output: String,
    state: ViewState,
}

impl TranslatorView {
    /// A view waiting for its language catalog.
    pub fn new() -> Self {
        Self {
            target_lang: Lang::new(DEFAULT_TARGET_LANG),
            services: Service::all().to_vec(),
            ..Self::default()
        }
    }

    /// Finish the one-shot catalog load, success or failure.
    ///
    /// Ends `LanguagesLoading` unconditionally so the view becomes
    /// interactive; a failed fetch leaves the catalog empty behind the
    /// fixed error banner.
    pub fn catalog_loaded(&mut self, result: Result<CatalogListing>) {
        match result {
            Ok(listing) => {
                self.catalog = listing.languages;
                self.services = listing.services;
                if !self.catalog.contains(self.target_lang.as_str())
                    && let Some(code) = self.catalog.first_code()
                {
                    self.target_lang = Lang::new(code);
                }
                self.state = ViewState::Ready;
            }
            Err(e) => {
                self.catalog = LanguageCatalog::default();
                self.state = ViewState::Error(e.to_string());
            }
        }
    }

    /// Whether a submission with this text would be accepted right now.
    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty()
            && !self.state.is_translating()
            && !self.state.is_loading_languages()
    }

    /// Try to start a submission.
    ///
    /// Returns the request to send, or `None` when the guard refuses:
    /// whitespace-only text, catalog still loading, or a request already in
    /// flight. A refused submission changes nothing. Acceptance records the
    /// selections, clears any prior error and enters `Translating`; the
    /// caller must follow up with [`Self::complete`].
    ///
    /// The target code is not checked against the catalog; an unrecognized
    /// code is forwarded and left for the backend to reject.
    pub fn begin_submit(
        &mut self,
        text: &str,
        target_lang: Lang,
        service: Service,
    ) -> Option<TranslationRequest> {
        if !self.can_submit(text) {
            return None;
        }

        self.input = text.to_string();
        self.target_lang = target_lang.clone();
        self.service = service;
        self.state = ViewState::Translating;

        Some(TranslationRequest {
            text: text.to_string(),
            target_lang,
            service,
        })
    }

    /// Finish the in-flight submission, success or failure.
    ///
    /// Leaves `Translating` unconditionally: success stores the translated
    /// text and returns to `Ready`, failure surfaces the error message.
    pub fn complete(&mut self, result: Result<String>) {
        if !self.state.is_translating() {
            warn!("Translation completed with no submission in flight");
            return;
        }

        self.state = match result {
            Ok(translated) => {
                self.output = translated;
                ViewState::Ready
            }
            Err(e) => ViewState::Error(e.to_string()),
        };
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub const fn target_lang(&self) -> &Lang {
        &self.target_lang
    }

    pub const fn service(&self) -> Service {
        self.service
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn listing(pairs: &[(&str, &str)]) -> CatalogListing {
        CatalogListing {
            languages: pairs
                .iter()
                .map(|(c, n)| ((*c).to_string(), (*n).to_string()))
                .collect(),
            services: Service::all().to_vec(),
        }
    }

    fn ready_view() -> TranslatorView {
        let mut view = TranslatorView::new();
        view.catalog_loaded(Ok(listing(&[("es", "Spanish"), ("fr", "French")])));
        view
    }

    #[test]
    fn test_catalog_success_populates_options_and_ends_loading() {
        let view = ready_view();
        assert_eq!(*view.state(), ViewState::Ready);

        let options: Vec<_> = view.catalog().iter().collect();
        assert_eq!(options, [("es", "Spanish"), ("fr", "French")]);
    }

    #[test]
    fn test_catalog_failure_leaves_view_interactive_with_fixed_message() {
        let mut view = TranslatorView::new();
        view.catalog_loaded(Err(Error::LanguageFetch));

        assert!(view.catalog().is_empty());
        assert!(!view.state().is_loading_languages());
        assert_eq!(
            view.state().error_message(),
            Some("Failed to fetch supported languages")
        );
        // Still interactive: an arbitrary code is forwarded, not rejected.
        assert!(view.can_submit("Hello"));
    }

    #[test]
    fn test_whitespace_input_is_a_no_op() {
        let mut view = ready_view();
        let before = view.state().clone();

        assert!(view.begin_submit("   \n\t", Lang::new("es"), Service::Google).is_none());
        assert_eq!(*view.state(), before);
    }

    #[test]
    fn test_submission_refused_while_languages_loading() {
        let mut view = TranslatorView::new();
        assert!(view.begin_submit("Hello", Lang::new("es"), Service::Google).is_none());
        assert_eq!(*view.state(), ViewState::LanguagesLoading);
    }

    #[test]
    fn test_successful_translation_round_trip() {
        let mut view = ready_view();

        let request = view
            .begin_submit("Hello", Lang::new("es"), Service::Google)
            .unwrap();
        assert_eq!(request.text, "Hello");
        assert_eq!(request.target_lang.as_str(), "es");
        assert_eq!(*view.state(), ViewState::Translating);

        view.complete(Ok("Hola".to_string()));
        assert_eq!(view.output(), "Hola");
        assert_eq!(*view.state(), ViewState::Ready);
    }

    #[test]
    fn test_failure_surfaces_backend_message() {
        let mut view = ready_view();
        view.begin_submit("Hello", Lang::new("es"), Service::Google)
            .unwrap();

        view.complete(Err(Error::Translation("rate limited".to_string())));
        assert_eq!(view.state().error_message(), Some("rate limited"));
        // The previous result is untouched by a failure.
        assert_eq!(view.output(), "");
    }

    #[test]
    fn test_failure_falls_back_to_generic_message() {
        let mut view = ready_view();
        view.begin_submit("Hello", Lang::new("es"), Service::Google)
            .unwrap();

        view.complete(Err(Error::translation_failed()));
        assert_eq!(view.state().error_message(), Some("Translation failed"));
    }

    #[test]
    fn test_no_second_request_while_translating() {
        let mut view = ready_view();
        view.begin_submit("Hello", Lang::new("es"), Service::Google)
            .unwrap();

        assert!(view.begin_submit("Hello again", Lang::new("fr"), Service::Openai).is_none());
        assert_eq!(*view.state(), ViewState::Translating);
        // The refused submission did not overwrite the recorded request.
        assert_eq!(view.input(), "Hello");
        assert_eq!(view.service(), Service::Google);
    }

    #[test]
    fn test_next_submission_clears_prior_error() {
        let mut view = ready_view();
        view.begin_submit("Hello", Lang::new("es"), Service::Google)
            .unwrap();
        view.complete(Err(Error::Translation("rate limited".to_string())));

        view.begin_submit("Hello", Lang::new("es"), Service::Google)
            .unwrap();
        assert_eq!(*view.state(), ViewState::Translating);
        assert_eq!(view.state().error_message(), None);
    }

    #[test]
    fn test_completion_without_submission_is_ignored() {
        let mut view = ready_view();
        view.complete(Ok("stray".to_string()));
        assert_eq!(view.output(), "");
        assert_eq!(*view.state(), ViewState::Ready);
    }

    #[test]
    fn test_default_target_follows_catalog() {
        let mut view = TranslatorView::new();
        assert_eq!(view.target_lang().as_str(), "es");

        view.catalog_loaded(Ok(listing(&[("de", "German"), ("fr", "French")])));
        assert_eq!(view.target_lang().as_str(), "de");
    }

    #[test]
    fn test_advertised_services_survive_load() {
        let mut view = TranslatorView::new();
        view.catalog_loaded(Ok(CatalogListing {
            languages: listing(&[("es", "Spanish")]).languages,
            services: vec![Service::Google],
        }));
        assert_eq!(view.services(), [Service::Google]);
    }
}
