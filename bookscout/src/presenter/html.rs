//! Minimal HTML escaping for chat messages sent in HTML parse mode.

/// Escapes `&`, `<` and `>`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry <3>"), "Tom &amp; Jerry &lt;3&gt;");
        assert_eq!(escape_html("Пикник"), "Пикник");
        assert_eq!(escape_html(""), "");
    }
}
