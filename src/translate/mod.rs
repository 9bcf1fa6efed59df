//! Translate a demo record into a playground submission.
//!
//! Translation is a pure function of the demo, the caller's external scripts
//! and the [`PlaygroundConfig`]: it performs no I/O and shares no state, so it
//! can run on many demos at once.

mod html;
mod module;
mod resources;

pub use html::{augment_html, AugmentError};
pub use module::rewrite_module;
pub use resources::{build_external_resources, ExternalResources};

use crate::config::PlaygroundConfig;
use crate::demo::{Demo, TranslationResult};

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("could not augment index html of demo {demo_id}")]
    Augment {
        demo_id: String,
        #[source]
        source: AugmentError,
    },
}

/// Translate `demo` using the default playground configuration.
pub fn translate(
    demo: &Demo,
    external_scripts: &[String],
) -> Result<TranslationResult, TranslateError> {
    translate_with(&PlaygroundConfig::default(), demo, external_scripts)
}

pub fn translate_with(
    config: &PlaygroundConfig,
    demo: &Demo,
    external_scripts: &[String],
) -> Result<TranslationResult, TranslateError> {
    let ExternalResources {
        css_external,
        js_external,
    } = build_external_resources(config, external_scripts);
    let css = demo.css.join("\n");
    let js = rewrite_module(&demo.js.join("\n"), &config.module_name);
    let html = augment_html(&demo.index, &demo.id, &demo.html, config).map_err(|source| {
        TranslateError::Augment {
            demo_id: demo.id.clone(),
            source,
        }
    })?;
    tracing::debug!(demo_id = %demo.id, "translated demo");
    Ok(TranslationResult {
        title: demo.title.clone(),
        css,
        css_external,
        js,
        js_external,
        html,
    })
}
