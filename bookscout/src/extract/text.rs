//! Conversion of page fragments to plain text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("entity pattern is valid")
});

/// Strips tags, decodes entities and trims.
///
/// Entities are decoded after tags are removed, so an encoded `&lt;i&gt;`
/// survives as the text `<i>`. Unknown named entities are kept verbatim.
#[must_use]
pub fn plain_text(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, "");
    decode_entities(&stripped).trim().to_string()
}

/// Decodes named and numeric character references.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let name = &caps[1];
            decode_reference(name).map_or_else(|| whole.to_string(), String::from)
        })
        .into_owned()
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = name.strip_prefix('#') {
        return decimal.parse().ok().and_then(char::from_u32);
    }
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "laquo" => '«',
        "raquo" => '»',
        "bdquo" => '„',
        "ldquo" => '“',
        "rdquo" => '”',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "copy" => '©',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_entities() {
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&laquo;Hi&raquo;"), "«Hi»");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("&#1046;&#x416;&#X416;"), "ЖЖЖ");
        assert_eq!(decode_entities("&#9999999;"), "&#9999999;");
    }

    #[test]
    fn test_unknown_entity_kept() {
        assert_eq!(decode_entities("a &bogus; b & c"), "a &bogus; b & c");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text(" &laquo;Hi&raquo; <i>it</i> "), "«Hi» it");
        assert_eq!(plain_text("&lt;i&gt;kept&lt;/i&gt;"), "<i>kept</i>");
        assert_eq!(plain_text("<b></b>"), "");
    }
}
