use crate::demo::TranslationResult;

fn debug_print_field(name: &str, value: &str) {
    println!("{name}:");
    for line in value.lines() {
        println!("  {line}");
    }
}

/// Print a payload field by field, indenting each value so multi-line
/// fragments stay readable.
pub fn debug_print_result(result: &TranslationResult) {
    debug_print_field("title", &result.title);
    debug_print_field("css_external", &result.css_external);
    debug_print_field("js_external", &result.js_external.replace(';', "\n"));
    debug_print_field("css", &result.css);
    debug_print_field("js", &result.js);
    debug_print_field("html", &result.html);
}
