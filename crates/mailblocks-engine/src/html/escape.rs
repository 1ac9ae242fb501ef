use std::borrow::Cow;

use crate::link::Href;

/// Escape text content for placement between tags
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape a value for placement inside a double-quoted attribute
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Strip everything from a CSS value that could end the declaration or the
/// surrounding attribute. Colors, lengths and font stacks pass through.
pub fn sanitize_css_value(value: &str) -> Cow<'_, str> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || "#(),.%-' ".contains(c);

    if value.chars().all(allowed) {
        return Cow::Borrowed(value.trim());
    }

    let cleaned: String = value
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|&c| allowed(c))
        .collect();
    Cow::Owned(cleaned.trim().to_string())
}

/// Turn a user-supplied link into something safe for an `href`/`src`
/// attribute. Anything that is not http(s), mailto or an app route becomes `#`.
pub fn safe_url(url: &str) -> Cow<'_, str> {
    match Href::parse(url) {
        Ok(_) => escape_attribute(url.trim()),
        Err(e) => {
            log::debug!("dropping unsafe url {url:?}: {e}");
            Cow::Borrowed("#")
        }
    }
}
