use serde::{Deserialize, Serialize};

/// How much of a string [`html_encode_with`] escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HtmlEncodeMode {
    /// Replace only `<` and `>`.
    #[default]
    TagCharactersOnly,
    /// Escape `&`, `<`, `>`, quotes and every non-ASCII character.
    Full,
}

/// Replace `<` and `>` with `&lt;` and `&gt;`, leaving everything else as is.
pub fn html_encode(value: &str) -> String {
    html_encode_with(value, HtmlEncodeMode::TagCharactersOnly)
}

pub fn html_encode_with(value: &str, mode: HtmlEncodeMode) -> String {
    match mode {
        HtmlEncodeMode::TagCharactersOnly => encode_tag_characters(value),
        HtmlEncodeMode::Full => encode_full(value),
    }
}

fn encode_tag_characters(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Markup characters go through quick-xml; non-ASCII becomes `&#N;`.
fn encode_full(value: &str) -> String {
    let escaped = quick_xml::escape::escape(value);

    let mut result = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if c.is_ascii() {
            result.push(c);
        } else {
            result.push_str("&#");
            result.push_str(&u32::from(c).to_string());
            result.push(';');
        }
    }
    result
}
