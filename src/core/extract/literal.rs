//! PHP string literal decoding.
//!
//! PHP has two escaping grammars for quoted strings. Only the escapes that
//! matter for extracting translatable text are decoded; everything else is
//! kept verbatim. POT escaping is applied later, at render time.

use super::scanner::skip_literal;

/// Quote character a PHP literal was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `'...'`: only `\\` and `\'` are escapes.
    Single,
    /// `"..."`: only `\"` is decoded; interpolation is not evaluated.
    Double,
}

impl QuoteStyle {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'\'' => Some(Self::Single),
            b'"' => Some(Self::Double),
            _ => None,
        }
    }

    /// Characters that lose their leading backslash when decoded.
    fn escapable(self) -> &'static [char] {
        match self {
            Self::Single => &['\\', '\''],
            Self::Double => &['"'],
        }
    }
}

/// A single quoted PHP literal token, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhpLiteral<'a> {
    pub style: QuoteStyle,
    /// Raw text strictly between the quotes.
    pub body: &'a str,
}

impl<'a> PhpLiteral<'a> {
    /// Parse `token` as exactly one quoted literal.
    ///
    /// Returns `None` unless the literal opened by the first character closes
    /// at the last one, so `'a' . 'b'` and `'open` are rejected.
    pub fn parse(token: &'a str) -> Option<Self> {
        let bytes = token.as_bytes();
        let style = QuoteStyle::from_byte(*bytes.first()?)?;
        let end = skip_literal(bytes, 0)?;
        if end != bytes.len() {
            return None;
        }
        Some(Self {
            style,
            body: &token[1..end - 1],
        })
    }

    /// Decode the literal into canonical text.
    pub fn decode(&self) -> String {
        unescape(self.body, self.style.escapable())
    }
}

/// Decode a raw PHP literal token, or `None` if it is not a single literal.
///
/// # Examples
///
/// ```
/// use wp_pot::core::extract::decode_literal;
///
/// assert_eq!(decode_literal(r"'It\'s escaped'").as_deref(), Some("It's escaped"));
/// assert_eq!(decode_literal(r#""Hello \"World\"""#).as_deref(), Some("Hello \"World\""));
/// assert_eq!(decode_literal("$text"), None);
/// ```
pub fn decode_literal(token: &str) -> Option<String> {
    PhpLiteral::parse(token).map(|literal| literal.decode())
}

fn unescape(body: &str, escapable: &[char]) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        // Escape pairs are consumed together so `\\'` can never be misread.
        match chars.next() {
            Some(next) if escapable.contains(&next) => out.push(next),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}
