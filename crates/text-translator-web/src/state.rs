use text_translator_core::{AppConfig, BackendClient, TranslatorView};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Global application state: the backend client and the one translator view.
///
/// The view lives behind an async `RwLock`. Locks are only taken inside the
/// synchronous closures of [`Self::with_view`] / [`Self::with_view_mut`] and
/// are released before any `.await`, so a slow backend call never holds the
/// view hostage.
pub struct AppState {
    client: BackendClient,
    view: RwLock<TranslatorView>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: BackendClient::new(&config.backend),
            view: RwLock::new(TranslatorView::new()),
        }
    }

    /// One-shot catalog load performed before the server starts accepting
    /// requests, so `LanguagesLoading` has always ended by the time the view
    /// is reachable. Failure is absorbed into the view's error state.
    pub async fn load_catalog(&self) {
        let result = self.client.fetch_languages().await;
        match &result {
            Ok(listing) => info!(
                "Language catalog loaded: {} languages, {} services",
                listing.languages.len(),
                listing.services.len()
            ),
            Err(e) => warn!("Language catalog load failed: {}", e),
        }
        self.view.write().await.catalog_loaded(result);
    }

    /// Read the view within a closure. The lock is released on return.
    pub async fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TranslatorView) -> R,
    {
        f(&*self.view.read().await)
    }

    /// Mutate the view within a closure. The lock is released on return.
    pub async fn with_view_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TranslatorView) -> R,
    {
        f(&mut *self.view.write().await)
    }

    pub const fn client(&self) -> &BackendClient {
        &self.client
    }
}
