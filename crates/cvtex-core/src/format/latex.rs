//! LaTeX formatters: bold markup, pipe-separated lists, inline metrics

use regex::Regex;
use std::sync::LazyLock;

use super::FilterValue;

/// Separator placed between `pipes` items
pub const PIPE_SEPARATOR: &str = r" {\color{divider}|} ";

/// Separator placed between `metrics` items
pub const METRIC_SEPARATOR: &str = r" \textcolor{divider}{•} ";

/// Slash followed by a soft line-break hint
const SLASH_BREAK: &str = r"/\allowbreak{}";

static EMPHASIS_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    // Non-greedy, and `.` does not cross newlines
    Regex::new(r"\*\*(.*?)\*\*").unwrap()
});

/// Escape `%` and `$`, then convert `**text**` spans to `\textbf{text}`
///
/// Unbalanced markers stay literal asterisks.
///
/// # Examples
///
/// ```
/// use cvtex_core::format::bold;
///
/// assert_eq!(bold("**x**"), r"\textbf{x}");
/// assert_eq!(bold("100%"), r"100\%");
/// ```
pub fn bold(text: &str) -> String {
    let escaped = text.replace('%', r"\%").replace('$', r"\$");
    EMPHASIS_SPAN
        .replace_all(&escaped, r"\textbf{${1}}")
        .into_owned()
}

/// Join items with a colored pipe divider
///
/// A scalar is split on commas and each piece trimmed; list items are used
/// as-is. Every item goes through [`bold`] and gets a break hint after each
/// `/`. Empty items are dropped without leaving a separator behind.
pub fn pipes(value: &FilterValue) -> String {
    let items: Vec<&str> = match value {
        FilterValue::Scalar(text) => text.split(',').map(str::trim).collect(),
        FilterValue::List(items) => items.iter().map(String::as_str).collect(),
    };

    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .map(|item| bold(item).replace('/', SLASH_BREAK))
        .collect::<Vec<_>>()
        .join(PIPE_SEPARATOR)
}

/// Render values as bold inline metrics separated by a colored bullet
///
/// Already-escaped `\%` and `\$` in the input come out of [`bold`] as
/// `\\%` and `\\$`; those are collapsed back to a single escape.
// NOTE: the collapse papers over values that were escaped before reaching
// the template. Keep it until the data sources are confirmed clean.
pub fn metrics<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| {
            let text = bold(value.as_ref())
                .replace(r"\\%", r"\%")
                .replace(r"\\$", r"\$");
            format!(r"\textbf{{{}}}", text)
        })
        .collect::<Vec<_>>()
        .join(METRIC_SEPARATOR)
}
