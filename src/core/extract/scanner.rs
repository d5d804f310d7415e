//! Depth- and quote-aware scanning over PHP source text.
//!
//! PHP argument lists cannot be split on commas naively: nested calls,
//! string contents and array literals all contain commas and parentheses.
//! The helpers here walk the text byte by byte, skipping over quoted
//! literals and comments and tracking nesting depth. They are shared by the call
//! extractor (to find a call's closing parenthesis) and the argument
//! splitter.
//!
//! All delimiters are ASCII, so scanning bytes is safe on UTF-8 input:
//! a multi-byte character never contains an ASCII byte.

/// Skip past a quoted literal starting at `pos` (which must point to the
/// opening quote).
///
/// A backslash escapes the following byte, so `\'` or `\"` never closes the
/// literal. Returns the position right after the closing quote, or `None`
/// when the literal is unterminated.
pub(crate) fn skip_literal(bytes: &[u8], pos: usize) -> Option<usize> {
    let quote = bytes[pos];
    let mut i = pos + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Skip past a comment starting at `pos`, if one starts there.
///
/// `//` and `#` comments run to the end of the line or to a closing `?>`,
/// whichever comes first. `#[` opens an attribute, not a comment. A block
/// comment ends after `*/` and an unterminated one runs to the end of the
/// input. Returns the position right after the comment.
pub(crate) fn skip_comment(bytes: &[u8], pos: usize) -> Option<usize> {
    let next = bytes.get(pos + 1).copied();
    match (bytes[pos], next) {
        (b'/', Some(b'*')) => {
            let mut i = pos + 2;
            while i + 1 < bytes.len() {
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    return Some(i + 2);
                }
                i += 1;
            }
            Some(bytes.len())
        }
        (b'/', Some(b'/')) => Some(line_comment_end(bytes, pos + 2)),
        (b'#', next) if next != Some(b'[') => Some(line_comment_end(bytes, pos + 1)),
        _ => None,
    }
}

fn line_comment_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => return i,
            b'?' if bytes.get(i + 1) == Some(&b'>') => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Find the position of the `)` matching the `(` at `open`.
///
/// Parentheses inside quoted literals and comments are ignored. Returns `None` when the
/// parentheses are unbalanced up to the end of `text`, or when a literal is
/// left unterminated.
pub fn find_matching_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut pos = open;
    while pos < bytes.len() {
        if let Some(end) = skip_comment(bytes, pos) {
            pos = end;
            continue;
        }
        match bytes[pos] {
            b'\'' | b'"' => {
                pos = skip_literal(bytes, pos)?;
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Split the text between a call's parentheses into top-level arguments.
///
/// A comma separates arguments only outside quoted literals, comments and
/// nested `(...)` or `[...]`. Each argument spans from its first to its last
/// significant byte, so surrounding whitespace and comments are dropped. A
/// trailing comma does not produce an empty final argument, and an empty
/// argument list yields no arguments.
///
/// # Examples
///
/// ```
/// use wp_pot::core::extract::split_arguments;
///
/// assert_eq!(
///     split_arguments(r#" "a, b", sprintf( '%s', $x ), /* ctx */ 'dom' "#),
///     vec![r#""a, b""#, "sprintf( '%s', $x )", "'dom'"],
/// );
/// ```
pub fn split_arguments(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut args = Vec::new();
    let mut depth = 0usize;
    // Significant span of the argument being read.
    let mut span: Option<(usize, usize)> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        if let Some(end) = skip_comment(bytes, pos) {
            pos = end;
            continue;
        }
        let token_end = match bytes[pos] {
            b'\'' | b'"' => skip_literal(bytes, pos).unwrap_or(bytes.len()),
            b',' if depth == 0 => {
                args.push(span.map_or("", |(start, end)| &inner[start..end]));
                span = None;
                pos += 1;
                continue;
            }
            b if b.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b'(' | b'[' => {
                depth += 1;
                pos + 1
            }
            b')' | b']' => {
                depth = depth.saturating_sub(1);
                pos + 1
            }
            _ => pos + 1,
        };
        span = Some((span.map_or(pos, |(start, _)| start), token_end));
        pos = token_end;
    }

    if let Some((start, end)) = span {
        args.push(&inner[start..end]);
    }
    args
}

/// Strip one layer of wrapping parentheses from an argument.
///
/// `( "Hello" )` becomes `"Hello"`; `("a") . ("b")` is left untouched
/// because its first parenthesis does not close at the end.
pub fn unwrap_parens(arg: &str) -> &str {
    if arg.starts_with('(') && find_matching_paren(arg, 0) == Some(arg.len() - 1) {
        arg[1..arg.len() - 1].trim()
    } else {
        arg
    }
}
