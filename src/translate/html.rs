//! Augment a demo's index fragment so the playground can bootstrap it.
//!
//! The fragment is streamed through `lol_html`, which leaves everything it is
//! not asked to touch byte-for-byte intact. Only the first element (the root)
//! is edited, and only text content is escaped.

use std::cell::Cell;

use lol_html::errors::RewritingError;
use lol_html::html_content::{ContentType, TextType};
use lol_html::{doc_text, element, rewrite_str, RewriteStrSettings};

use crate::config::{PlaygroundConfig, BOOTSTRAP_ATTRIBUTE, TEMPLATE_SCRIPT_TYPE};
use crate::demo::Template;

#[derive(Debug, thiserror::Error)]
pub enum AugmentError {
    #[error("html fragment has no root element: {fragment:?}")]
    NoRootElement { fragment: String },
    #[error("root element <{tag}> cannot hold templates: {fragment:?}")]
    RootWithoutContent { tag: String, fragment: String },
    #[error("could not rewrite html fragment {fragment:?}")]
    Rewrite {
        fragment: String,
        #[source]
        source: RewritingError,
    },
}

/// Escape every `&` so that entities survive the playground decoding its
/// input once before rendering.
fn escape_ampersands(text: &str) -> String {
    text.replace('&', "&amp;")
}

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Add `class` to a whitespace-separated class list, unless it is already
/// there.
fn add_class(classes: Option<&str>, class: &str) -> String {
    let classes = classes.unwrap_or("").trim();
    if classes.split_whitespace().any(|c| c == class) {
        return classes.to_string();
    }
    if classes.is_empty() {
        class.to_string()
    } else {
        format!("{classes} {class}")
    }
}

fn template_script(template: &Template) -> String {
    format!(
        "<script type=\"{TEMPLATE_SCRIPT_TYPE}\" id=\"{id}\">{contents}</script>",
        id = escape_attribute(&template.name),
        contents = template.contents,
    )
}

/// Mark the root element of `index` with the bootstrap attribute and
/// `demo_id` class, escape ampersands in its text, and append a script
/// element for each template.
pub fn augment_html(
    index: &str,
    demo_id: &str,
    templates: &[Template],
    config: &PlaygroundConfig,
) -> Result<String, AugmentError> {
    let root_seen = Cell::new(false);
    let void_root: Cell<Option<String>> = Cell::new(None);
    let scripts: String = templates.iter().map(template_script).collect();

    let output = rewrite_str(
        index,
        RewriteStrSettings {
            element_content_handlers: vec![element!("*", |el| {
                if root_seen.replace(true) {
                    return Ok(());
                }
                el.set_attribute(BOOTSTRAP_ATTRIBUTE, &config.module_name)?;
                let class = add_class(el.get_attribute("class").as_deref(), demo_id);
                el.set_attribute("class", &class)?;
                if scripts.is_empty() {
                    return Ok(());
                }
                // inserted content bypasses the text handler below, so
                // templates are kept verbatim
                let tag = el.tag_name();
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    void_root.set(Some(tag));
                } else if el.is_self_closing() {
                    // `<div/>` opens a div in HTML but has no end tag to
                    // append before, so close it after the templates
                    el.after(&format!("{scripts}</{tag}>"), ContentType::Html);
                } else {
                    el.append(&scripts, ContentType::Html);
                }
                Ok(())
            })],
            document_content_handlers: vec![doc_text!(|t| {
                if matches!(t.text_type(), TextType::Data | TextType::RCData)
                    && t.as_str().contains('&')
                {
                    let escaped = escape_ampersands(t.as_str());
                    t.replace(&escaped, ContentType::Html);
                }
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|source| AugmentError::Rewrite {
        fragment: index.to_string(),
        source,
    })?;

    if !root_seen.get() {
        return Err(AugmentError::NoRootElement {
            fragment: index.to_string(),
        });
    }
    if let Some(tag) = void_root.take() {
        return Err(AugmentError::RootWithoutContent {
            tag,
            fragment: index.to_string(),
        });
    }
    tracing::debug!(demo_id, templates = templates.len(), "augmented index html");
    Ok(output)
}
