//! HTTP route handlers for the translator view.
//!
//! The page route returns full HTML; the translate route returns an HTMX
//! fragment. Both render Askama templates from the `templates` module.

mod health;
mod pages;
mod translate;

pub use health::healthz;
pub use pages::index;
pub use translate::translate;

use serde::Deserialize as SerdeDeserialize;

/// Form data for a translation submission.
#[derive(SerdeDeserialize, Default)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_lang: String,
    #[serde(default)]
    pub service: String,
}
