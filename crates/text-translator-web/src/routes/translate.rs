//! Translation route - submits one request to the backend per user action.

use axum::extract::{Form, State};
use std::sync::Arc;
use text_translator_core::{Lang, Service};
use tracing::debug;

use super::TranslateForm;
use crate::state::AppState;
use crate::templates::TranslateResultTemplate;

/// Submit a translation - returns the output fragment.
///
/// HTMX: Replaces `#output-area`, includes an OOB swap for the error banner.
/// The state machine refuses whitespace-only text and re-entry while a
/// request is in flight; a refused submission re-renders the view unchanged
/// and issues no backend request. The write lock is released before the
/// backend call and re-taken to record the outcome.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TranslateForm>,
) -> TranslateResultTemplate {
    // Unknown service ids fall back to the default provider, mirroring the
    // backend's own default.
    let service = Service::from_id(&form.service).unwrap_or_default();
    let target_lang = Lang::new(form.target_lang);

    let request = state
        .with_view_mut(|view| view.begin_submit(&form.text, target_lang, service))
        .await;

    let Some(request) = request else {
        debug!("Submission refused by guard; no request issued");
        return state.with_view(TranslateResultTemplate::from_view).await;
    };

    let result = state.client().translate(&request).await;
    state.with_view_mut(|view| view.complete(result)).await;

    state.with_view(TranslateResultTemplate::from_view).await
}
