/*!
Splits the raw bytes of one object into key and value spans.

Each attribute starts with a key made of [KeyGrammar] characters and terminated by `:`.
The value runs from the `:` to the end of the line, plus any following lines that start
with a continuation character (space, tab or `+`).

The scanning functions take a buffer and a position and hand back the new position, so
the cursor is always explicit.
*/
use crate::error::{SyntaxError, SyntaxErrorKind};

/// Characters accepted in attribute keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyGrammar {
    /// `A-Z`, `a-z`, `0-9` and `-`.
    #[default]
    Standard,
    /// [KeyGrammar::Standard] plus the `*` used by short-form whois output.
    Wildcard,
}

impl KeyGrammar {
    #[inline]
    pub fn is_key_char(&self, c: u8) -> bool {
        match self {
            KeyGrammar::Standard => c.is_ascii_alphanumeric() || c == b'-',
            KeyGrammar::Wildcard => c.is_ascii_alphanumeric() || c == b'-' || c == b'*',
        }
    }
}

/// A key and its unprocessed, possibly multi-line, value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAttribute<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

#[inline]
pub(crate) fn is_continuation_char(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'+'
}

/// Extracts the key starting at `pos`.
///
/// Returns the key and the position right after the `:`. Error offsets are positions in
/// `buf`.
pub fn parse_key(
    buf: &[u8],
    pos: usize,
    grammar: KeyGrammar,
) -> Result<(&[u8], usize), SyntaxError> {
    let start = pos;
    for (idx, &c) in buf.iter().enumerate().skip(start) {
        if c == b':' {
            if idx == start {
                return Err(SyntaxError::new(SyntaxErrorKind::EmptyKey, idx));
            }
            return Ok((&buf[start..idx], idx + 1));
        }
        if !grammar.is_key_char(c) {
            return Err(SyntaxError::new(SyntaxErrorKind::IllegalKeyCharacter(c), idx));
        }
    }
    Err(SyntaxError::new(SyntaxErrorKind::UnterminatedKey, start))
}

/// Checks that `key` is a complete key, without the `:` terminator. Error offsets are
/// positions in `key`.
pub fn validate_key(key: &[u8], grammar: KeyGrammar) -> Result<(), SyntaxError> {
    if key.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyKey, 0));
    }
    match key.iter().position(|c| !grammar.is_key_char(*c)) {
        Some(idx) => Err(SyntaxError::new(
            SyntaxErrorKind::IllegalKeyCharacter(key[idx]),
            idx,
        )),
        None => Ok(()),
    }
}

/// Extracts the value starting at `pos`, up to a newline that is not followed by a
/// continuation character.
///
/// Returns the value span and the position where the next key starts. A trailing `\r` is
/// not part of the span.
pub fn parse_value(buf: &[u8], mut pos: usize) -> (&[u8], usize) {
    let start = pos;
    let mut stop = pos;

    while pos < buf.len() {
        let c = buf[pos];
        pos += 1;

        if c == b'\r' {
            continue;
        }

        if c == b'\n' && pos < buf.len() {
            if is_continuation_char(buf[pos]) {
                continue;
            }
            break;
        }

        stop = pos;
    }

    (&buf[start..stop], pos)
}

/// Iterator over the [RawAttribute]s of one object buffer.
///
/// Stops after the first error.
pub struct Tokenizer<'a> {
    buf: &'a [u8],
    pos: usize,
    grammar: KeyGrammar,
}

impl<'a> Tokenizer<'a> {
    pub fn new(buf: &'a [u8], grammar: KeyGrammar) -> Self {
        Tokenizer {
            buf,
            pos: 0,
            grammar,
        }
    }

    /// Current cursor position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<RawAttribute<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }

        let (key, pos) = match parse_key(self.buf, self.pos, self.grammar) {
            Ok(res) => res,
            Err(e) => {
                self.pos = self.buf.len();
                return Some(Err(e));
            }
        };
        let (value, pos) = parse_value(self.buf, pos);
        self.pos = pos;

        Some(Ok(RawAttribute { key, value }))
    }
}
