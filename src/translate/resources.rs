//! External stylesheets and scripts the playground loads before the demo.

use crate::config::PlaygroundConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalResources {
    pub css_external: String,
    pub js_external: String,
}

/// Demos never bring their own external CSS, so only scripts are aggregated:
/// the caller's URLs, then the framework, then the asset cache.
pub fn build_external_resources(
    config: &PlaygroundConfig,
    external_scripts: &[String],
) -> ExternalResources {
    let js_external = external_scripts
        .iter()
        .map(String::as_str)
        .chain([
            config.framework_js_url.as_str(),
            config.asset_cache_url.as_str(),
        ])
        .collect::<Vec<_>>()
        .join(";");
    ExternalResources {
        css_external: config.framework_css_url.clone(),
        js_external,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ASSET_CACHE_URL, FRAMEWORK_CSS_URL, FRAMEWORK_JS_URL};

    use super::*;

    #[test]
    fn test_external_scripts_first() {
        let resources = build_external_resources(
            &PlaygroundConfig::default(),
            &["http://x".to_string(), "http://y".to_string()],
        );
        assert_eq!(
            resources.js_external,
            format!("http://x;http://y;{FRAMEWORK_JS_URL};{ASSET_CACHE_URL}")
        );
        assert_eq!(resources.css_external, FRAMEWORK_CSS_URL);
    }

    #[test]
    fn test_no_external_scripts() {
        let resources = build_external_resources(&PlaygroundConfig::default(), &[]);
        assert_eq!(
            resources.js_external,
            format!("{FRAMEWORK_JS_URL};{ASSET_CACHE_URL}")
        );
    }
}
