//! Page routes - full HTML page renders.

use axum::extract::State;
use std::sync::Arc;

use crate::state::AppState;
use crate::templates::IndexTemplate;

/// The translator page.
///
/// The catalog load has always completed (success or failure) before the
/// server starts, so this never renders a blocking loading state; a failed
/// load shows the error banner over an empty selector.
pub async fn index(State(state): State<Arc<AppState>>) -> IndexTemplate {
    state.with_view(IndexTemplate::from_view).await
}
