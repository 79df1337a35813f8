use std::fmt::Write;

/// Quotes `text` the way a debug representation shows string fields:
/// single quotes unless the text holds a single quote and no double quote.
pub(crate) fn quote(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            // control characters are all below U+0100
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

pub(crate) fn id_repr(id: Option<i64>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "None".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("Clean Code"), "'Clean Code'");
    }

    #[test]
    fn test_quote_switches_delimiter() {
        assert_eq!(quote("Ender's Game"), "\"Ender's Game\"");
        assert_eq!(quote("it's \"quoted\""), "'it\\'s \"quoted\"'");
    }

    #[test]
    fn test_quote_escapes_control_chars() {
        assert_eq!(quote("a\\b\nc"), "'a\\\\b\\nc'");
    }

    #[test]
    fn test_quote_escapes_other_control_chars() {
        assert_eq!(quote("a\u{0}b"), "'a\\x00b'");
        assert_eq!(quote("a\u{7}b"), "'a\\x07b'");
        assert_eq!(quote("a\u{7f}b"), "'a\\x7fb'");
        assert_eq!(quote("a\u{85}b"), "'a\\x85b'");
    }

    #[test]
    fn test_id_repr() {
        assert_eq!(id_repr(None), "None");
        assert_eq!(id_repr(Some(-1)), "-1");
    }
}
