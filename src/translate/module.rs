//! Rewrite a demo's module declaration so it registers under the sandbox
//! module name.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Matches the arguments of `.module(NAME, [DEPS])`, where NAME may be quoted
/// with literal quotes or their HTML entities and any token may be separated
/// by whitespace or newlines. Quoted dependencies may contain `]`, and a
/// trailing comma may follow the dependency list. The identifier before the
/// `.` is not part of the match, so `angular\n.module(...)` keeps its line
/// break.
static MODULE_DECLARATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\.module\s*\(\s*(?:'[^']*'|"[^"]*"|&apos;.*?&apos;|&quot;.*?&quot;)\s*,\s*\[(?:'[^']*'|"[^"]*"|[^\]'"])*\]\s*,?\s*\)"#,
    )
    .unwrap()
});

/// Replace the first module declaration in `script` with a lookup of
/// `module_name`, dropping the original name and dependency list.
///
/// A script without a declaration is returned unchanged.
pub fn rewrite_module(script: &str, module_name: &str) -> String {
    let replacement = format!(".module('{module_name}')");
    if !MODULE_DECLARATION_RE.is_match(script) {
        if !script.trim().is_empty() {
            tracing::debug!("no module declaration found; keeping script as is");
        }
        return script.to_string();
    }
    MODULE_DECLARATION_RE
        .replacen(script, 1, NoExpand(&replacement))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn rewrite(script: &str) -> String {
        rewrite_module(script, "MyApp")
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            rewrite(r#"angular.module("SomeOtherModule", ["Dependency1"]);"#),
            "angular.module('MyApp');"
        );
    }

    #[test]
    fn test_second_argument_on_new_line() {
        assert_eq!(
            rewrite("angular.module('test',\n []);"),
            "angular.module('MyApp');"
        );
    }

    #[test]
    fn test_dependencies_on_new_lines() {
        let s = "angular.module('test', [\n 'Dep1',\n 'Dep2',\n]);";
        assert_eq!(rewrite(s), "angular.module('MyApp');");
    }

    #[test]
    fn test_module_on_new_line() {
        let s = "angular\n.module('test', [\n 'Dep1',\n 'Dep2',\n]);";
        assert_eq!(rewrite(s), "angular\n.module('MyApp');");
    }

    #[test]
    fn test_html_escaped_quotes() {
        assert_eq!(
            rewrite("angular.module(&apos;app&apos;, [&apos;ngMaterial&apos;]);"),
            "angular.module('MyApp');"
        );
        assert_eq!(
            rewrite("angular.module(&quot;app&quot;, [&apos;ngMaterial&apos;]);"),
            "angular.module('MyApp');"
        );
    }

    #[test]
    fn test_canonical_is_fixed_point() {
        let s = "angular.module('MyApp');";
        assert_eq!(rewrite(s), s);
        assert_eq!(rewrite(&rewrite("angular.module('x', []);")), s);
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let s = r#"(function() {
  angular
    .module('buttonDemo', ['ngMaterial'])
    .controller('AppCtrl', AppCtrl);

  function AppCtrl($scope) {
    $scope.title = "&copy; demo";
  }
})();"#;
        assert_snapshot!(rewrite(s), @r#"
        (function() {
          angular
            .module('MyApp')
            .controller('AppCtrl', AppCtrl);

          function AppCtrl($scope) {
            $scope.title = "&copy; demo";
          }
        })();
        "#);
    }

    #[test]
    fn test_only_first_declaration() {
        let s = "angular.module('a', []);\nangular.module('b', []);";
        assert_eq!(
            rewrite(s),
            "angular.module('MyApp');\nangular.module('b', []);"
        );
    }

    #[test]
    fn test_trailing_comma_after_dependencies() {
        let s = "angular.module('test', [\n  'ngMaterial'\n],\n);";
        assert_eq!(rewrite(s), "angular.module('MyApp');");
    }

    #[test]
    fn test_bracket_inside_dependency() {
        assert_eq!(
            rewrite(r#"angular.module('test', ['a]b', "c]"]);"#),
            "angular.module('MyApp');"
        );
    }

    #[test]
    fn test_no_declaration() {
        let s = "console.log('hello');";
        assert_eq!(rewrite(s), s);
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn test_custom_module_name() {
        assert_eq!(
            rewrite_module("angular.module('x', ['y']);", "Sandbox"),
            "angular.module('Sandbox');"
        );
    }
}
