//! Code Preview Highlighting
//!
//! JavaScript syntax highlighting (syntect) for the editor preview.

use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const LIGHT_THEME: &str = "InspiredGitHub";
const DARK_THEME: &str = "base16-mocha.dark";

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme(dark: bool) -> Option<&'static Theme> {
    let name = if dark { DARK_THEME } else { LIGHT_THEME };
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(name)
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn plain(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

/// Highlighted `<pre>` block for a JavaScript snippet
pub fn highlight_js(code: &str, dark: bool) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme(dark) else {
        return plain(code);
    };
    let syntax = ss
        .find_syntax_by_token("js")
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| plain(code))
}

/// Gutter text for the expanded view, one number per line
pub fn line_numbers(code: &str) -> String {
    let count = code.lines().count().max(1) + usize::from(code.ends_with('\n'));
    (1..=count).map(|n| n.to_string()).collect::<Vec<_>>().join("\n")
}
