/*!
Turns [RawAttribute]s into normalized [Attribute]s.

Keys are lowercased. Values are folded into a single line: continuation markers and
`#` comments are removed from every physical line, each line is trimmed, and the
non-empty lines are joined with a single space. Carriage returns are dropped wherever
they appear.
*/
use crate::models::Attribute;
use crate::parser::tokenizer::RawAttribute;
use log::warn;

/// Lowercases a key. Keys only ever contain ASCII characters.
pub fn normalize_key(key: &[u8]) -> String {
    let key = String::from_utf8_lossy(key);
    if key.bytes().any(|c| c.is_ascii_uppercase()) {
        key.to_ascii_lowercase()
    } else {
        key.into_owned()
    }
}

/// Strips a trailing `#` comment from one physical line.
#[inline]
fn strip_comment(line: &[u8]) -> &[u8] {
    match line.iter().position(|c| *c == b'#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Folds a raw, possibly multi-line, value into its single-line form.
///
/// A value that is already normalized comes back unchanged.
pub fn normalize_value(value: &[u8]) -> Vec<u8> {
    if !value.iter().any(|c| matches!(*c, b'\n' | b'#' | b'\r')) {
        return value.trim_ascii().to_vec();
    }

    let mut normalized = Vec::with_capacity(value.len());
    for (idx, line) in value.split(|c| *c == b'\n').enumerate() {
        // `+` only marks a continuation on the lines after the first one
        let line = match line.split_first() {
            Some((&b'+', rest)) if idx > 0 => rest,
            _ => line,
        };
        let line = strip_comment(line).trim_ascii();
        if line.is_empty() {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push(b' ');
        }
        normalized.extend(line.iter().filter(|c| **c != b'\r'));
    }
    normalized
}

/// Builds an [Attribute] from raw spans. Invalid UTF-8 in the value is replaced with
/// `U+FFFD`.
pub(crate) fn normalize(raw: RawAttribute<'_>, show_warnings: bool) -> Attribute {
    let name = normalize_key(raw.key);
    let value = match String::from_utf8(normalize_value(raw.value)) {
        Ok(value) => value,
        Err(e) => {
            if show_warnings {
                warn!(
                    "attribute '{}' has a value that is not valid UTF-8, replacing invalid bytes",
                    name
                );
            }
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Attribute::from_normalized(name, value)
}

impl From<RawAttribute<'_>> for Attribute {
    fn from(raw: RawAttribute<'_>) -> Self {
        normalize(raw, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(value: &str) -> String {
        String::from_utf8(normalize_value(value.as_bytes())).unwrap()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key(b"roUte6"), "route6");
        assert_eq!(normalize_key(b"MNT-BY"), "mnt-by");
        assert_eq!(normalize_key(b"nic-hdl"), "nic-hdl");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(normalized("   DEV-MNT  "), "DEV-MNT");
        assert_eq!(normalized(" DEV-MNT  # Comment "), "DEV-MNT");
        assert_eq!(normalized(""), "");
        assert_eq!(normalized(" # only a comment"), "");
    }

    #[test]
    fn test_continuation_lines() {
        assert_eq!(normalized("\n+1\n 2\n\t3"), "1 2 3");
        assert_eq!(
            normalized(" First line\n Continuation line 1\n Continuation line 2"),
            "First line Continuation line 1 Continuation line 2"
        );
        assert_eq!(normalized(" \n+123 Main St\n+Suite 100"), "123 Main St Suite 100");
    }

    #[test]
    fn test_comments_per_line() {
        assert_eq!(
            normalized(" first # note\n second\n+ # only comment\n third#x"),
            "first second third"
        );
    }

    #[test]
    fn test_empty_continuation_lines_dropped() {
        assert_eq!(normalized(" a\n+\n \n\tb"), "a b");
    }

    #[test]
    fn test_carriage_returns_dropped() {
        assert_eq!(normalized(" a\rb"), "ab");
        assert_eq!(normalized(" first\r\n second\r"), "first second");
        assert_eq!(normalized("\r"), "");
    }

    #[test]
    fn test_plus_on_first_line_kept() {
        assert_eq!(normalized("+1 555 123456"), "+1 555 123456");
        assert_eq!(normalized("+1 555\n more"), "+1 555 more");
    }

    #[test]
    fn test_idempotent() {
        for value in [
            "DEV-MNT",
            "1 2 3",
            "Flughafenstraße 120",
            ":!@$%^&*()_+~![]{};':<>,./?\\",
        ] {
            assert_eq!(normalized(value), value);
            assert_eq!(normalized(&normalized(value)), normalized(value));
        }
    }

    #[test]
    fn test_normalize_raw_attribute() {
        let raw = RawAttribute {
            key: b"Mntner",
            value: b"          DEV-MNT  # Comment ",
        };
        let attr = Attribute::from(raw);
        assert_eq!(attr.name(), "mntner");
        assert_eq!(attr.value(), "DEV-MNT");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let raw = RawAttribute {
            key: b"descr",
            value: b" caf\xe9",
        };
        let attr = normalize(raw, false);
        assert_eq!(attr.value(), "caf\u{FFFD}");
    }
}
