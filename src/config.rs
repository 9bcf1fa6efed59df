//! Fixed settings of the playground a demo is translated for.

/// Module name the playground bootstraps the page with.
pub const SANDBOX_MODULE_NAME: &str = "MyApp";

/// Playground-hosted copy of the framework stylesheet.
pub const FRAMEWORK_CSS_URL: &str =
    "https://cdn.rawgit.com/angular/bower-material/master/angular-material.css";

/// Playground-hosted copy of the framework script.
pub const FRAMEWORK_JS_URL: &str =
    "https://cdn.rawgit.com/angular/bower-material/master/angular-material.js";

/// Script the playground needs to serve embedded svg icons.
pub const ASSET_CACHE_URL: &str =
    "https://s3-us-west-2.amazonaws.com/s.cdpn.io/t-114/assets-cache.js";

/// Attribute on the root element naming the module to bootstrap.
pub const BOOTSTRAP_ATTRIBUTE: &str = "ng-app";

/// `type` of the script elements that carry inline templates.
pub const TEMPLATE_SCRIPT_TYPE: &str = "text/ng-template";

/// Read-only configuration for a translation.
///
/// The defaults are the hosted resources the playground expects; the command
/// line can override them at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    pub module_name: String,
    pub framework_css_url: String,
    pub framework_js_url: String,
    pub asset_cache_url: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            module_name: SANDBOX_MODULE_NAME.to_string(),
            framework_css_url: FRAMEWORK_CSS_URL.to_string(),
            framework_js_url: FRAMEWORK_JS_URL.to_string(),
            asset_cache_url: ASSET_CACHE_URL.to_string(),
        }
    }
}
