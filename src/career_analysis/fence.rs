// src/career_analysis/fence.rs
//! Markdown code fence removal ahead of JSON parsing.

const FENCE: &str = "```";

/// Removes at most one opening fence (with an optional language tag) and at
/// most one closing fence, then trims surrounding whitespace.
///
/// Text without fences is only trimmed, so applying this twice is the same as
/// applying it once.
pub fn strip_code_fences(text: &str) -> String {
    let text = text.trim();

    let Some(open) = text.find(FENCE) else {
        return text.to_string();
    };

    let head = &text[..open];
    let after_open = skip_language_tag(&text[open + FENCE.len()..]);

    let body = match after_open.rfind(FENCE) {
        Some(close) => format!(
            "{}{}",
            &after_open[..close],
            &after_open[close + FENCE.len()..]
        ),
        None => after_open.to_string(),
    };

    format!("{}{}", head, body).trim().to_string()
}

/// Skips a tag like `json` directly after an opening fence. A word is only
/// treated as a tag when it is `json` or is followed by whitespace.
fn skip_language_tag(rest: &str) -> &str {
    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());

    if tag_len == 0 {
        return rest;
    }

    let (tag, remainder) = rest.split_at(tag_len);
    let followed_by_space = remainder
        .chars()
        .next()
        .map_or(true, |c| c.is_whitespace());

    if tag.eq_ignore_ascii_case("json") || followed_by_space {
        remainder
    } else {
        rest
    }
}
