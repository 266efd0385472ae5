// src/render/escape.rs
//! LaTeX escaping and the `**bold**` inline annotation

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

const SPECIAL_CHARS: &[char] = &[
    '\\', '&', '%', '$', '#', '_', '{', '}', '[', ']', '~', '^',
];

fn bold_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

/// Escape every LaTeX special character in `text`.
///
/// The table is applied in one left-to-right pass, so the backslashes and braces
/// produced by one replacement are never seen by another.
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    if !text.contains(SPECIAL_CHARS) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            '$' => escaped.push_str(r"\$"),
            '#' => escaped.push_str(r"\#"),
            '_' => escaped.push_str(r"\_"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '[' => escaped.push_str("{[}"),
            ']' => escaped.push_str("{]}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Turn user text into markup: `**span**` becomes `\textbf{span}`, everything
/// else is escaped. A marker without a partner stays literal text.
pub fn format(raw: &str) -> String {
    let pattern = bold_pattern();
    let mut output = String::with_capacity(raw.len() + 16);
    let mut last = 0;

    for captures in pattern.captures_iter(raw) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        output.push_str(&escape_latex(&raw[last..whole.start()]));
        output.push_str(r"\textbf{");
        output.push_str(&escape_latex(inner.as_str()));
        output.push('}');
        last = whole.end();
    }

    output.push_str(&escape_latex(&raw[last..]));
    output
}

/// Escape a URL for use as the first argument of `\href`.
pub fn escape_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len() + 8);
    for c in url.trim().chars() {
        match c {
            '%' => escaped.push_str(r"\%"),
            '#' => escaped.push_str(r"\#"),
            '\\' => escaped.push_str(r"\%5C"),
            '{' => escaped.push_str(r"\%7B"),
            '}' => escaped.push_str(r"\%7D"),
            ' ' => escaped.push_str(r"\%20"),
            other => escaped.push(other),
        }
    }
    escaped
}
