//! Demo records and the playground payload they translate to.

use serde::{Deserialize, Serialize};

/// An inline template the demo's module loads by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub contents: String,
}

/// One usage example of a component, as extracted by the docs build.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Demo {
    /// Unique identifier, also used as a class marker on the root element.
    pub id: String,
    pub title: String,
    /// The demo's own module. Only referenced implicitly through the module
    /// declaration in `js`.
    #[serde(default)]
    pub module: String,
    /// HTML fragment with exactly one root element.
    pub index: String,
    #[serde(default)]
    pub css: Vec<String>,
    #[serde(default)]
    pub js: Vec<String>,
    #[serde(default)]
    pub html: Vec<Template>,
}

/// The payload accepted by the playground.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub title: String,
    pub css: String,
    pub css_external: String,
    pub js: String,
    pub js_external: String,
    pub html: String,
}
