//! Liveness probe reporting catalog status.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    languages: usize,
    catalog_loaded: bool,
}

/// Report whether the view is serving and how the catalog load went.
pub async fn healthz(State(state): State<Arc<AppState>>) -> Json<Health> {
    let (languages, catalog_loaded) = state
        .with_view(|view| (view.catalog().len(), !view.catalog().is_empty()))
        .await;

    Json(Health {
        status: "ok",
        languages,
        catalog_loaded,
    })
}
