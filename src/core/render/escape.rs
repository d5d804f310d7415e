//! POT string escaping.

/// Escape text for use inside a double-quoted POT string.
///
/// # Examples
///
/// ```
/// use wp_pot::core::render::escape_pot;
///
/// assert_eq!(escape_pot(r#"Hello "World""#), r#"Hello \"World\""#);
/// assert_eq!(escape_pot("a\\b\tc"), r"a\\b\tc");
/// ```
pub fn escape_pot(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str(r"\t"),
            '\r' => out.push_str(r"\r"),
            '\n' => out.push_str(r"\n"),
            c => out.push(c),
        }
    }
    out
}

/// Append a `keyword "text"` field to `out`.
///
/// Text containing newlines uses the multi-line convention: an empty string
/// on the keyword line, then one quoted line per newline-terminated segment.
pub fn write_field(out: &mut String, keyword: &str, text: &str) {
    out.push_str(keyword);
    if !text.contains('\n') {
        out.push_str(" \"");
        out.push_str(&escape_pot(text));
        out.push_str("\"\n");
        return;
    }

    out.push_str(" \"\"\n");
    for segment in text.split_inclusive('\n') {
        out.push('"');
        out.push_str(&escape_pot(segment));
        out.push_str("\"\n");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn field(keyword: &str, text: &str) -> String {
        let mut out = String::new();
        write_field(&mut out, keyword, text);
        out
    }

    #[test]
    fn test_escape_pot() {
        assert_eq!(escape_pot("plain"), "plain");
        assert_eq!(escape_pot(r"back\slash"), r"back\\slash");
        assert_eq!(escape_pot("\"quoted\""), r#"\"quoted\""#);
        assert_eq!(escape_pot("tab\there"), r"tab\there");
        assert_eq!(escape_pot("cr\r"), r"cr\r");
        assert_eq!(escape_pot("Grüße"), "Grüße");
    }

    #[test]
    fn test_single_line_field() {
        assert_eq!(field("msgid", "Name"), "msgid \"Name\"\n");
        assert_eq!(
            field("msgid", r#"Hello "World""#),
            "msgid \"Hello \\\"World\\\"\"\n"
        );
        assert_eq!(field("msgstr", ""), "msgstr \"\"\n");
    }

    #[test]
    fn test_multi_line_field() {
        assert_eq!(
            field("msgid", "Hello\nWorld"),
            "msgid \"\"\n\"Hello\\n\"\n\"World\"\n"
        );
        assert_eq!(
            field("msgctxt", "a\nb\nc"),
            "msgctxt \"\"\n\"a\\n\"\n\"b\\n\"\n\"c\"\n"
        );
    }

    #[test]
    fn test_multi_line_field_trailing_newline() {
        assert_eq!(field("msgid", "Line\n"), "msgid \"\"\n\"Line\\n\"\n");
    }
}
