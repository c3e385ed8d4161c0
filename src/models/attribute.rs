use crate::error::SyntaxError;
use crate::parser::normalizer::normalize_value;
use crate::parser::tokenizer::{validate_key, KeyGrammar};
use std::fmt::{Display, Formatter};

/// One normalized `key: value` pair of an RPSL object.
///
/// The name is always lowercase. The value is a single line with comments, continuation
/// markers and surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AttributeFields"))]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Constructs a new `Attribute` whose name follows [KeyGrammar::Standard].
    ///
    /// The name is lowercased. The value goes through the same normalization as parsed
    /// values: continuation lines are folded into one line and `#` comments are dropped.
    pub fn new(name: impl Into<String>, value: impl AsRef<str>) -> Result<Self, SyntaxError> {
        Attribute::with_key_grammar(name, value, KeyGrammar::Standard)
    }

    /// Like [Attribute::new], checking the name against `grammar`. Error offsets are
    /// positions in the name.
    pub fn with_key_grammar(
        name: impl Into<String>,
        value: impl AsRef<str>,
        grammar: KeyGrammar,
    ) -> Result<Self, SyntaxError> {
        let mut name = name.into();
        validate_key(name.as_bytes(), grammar)?;
        name.make_ascii_lowercase();
        // normalization only removes or inserts ASCII bytes, the value stays valid UTF-8
        let value = normalize_value(value.as_ref().as_bytes());
        let value = String::from_utf8_lossy(&value).into_owned();
        Ok(Attribute { name, value })
    }

    pub(crate) fn from_normalized(name: String, value: String) -> Self {
        Attribute { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Case-insensitive comparison against an attribute name.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Unchecked wire form of an [Attribute]. Names may use [KeyGrammar::Wildcard], as objects
/// parsed with that grammar serialize them.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AttributeFields {
    name: String,
    value: String,
}

#[cfg(feature = "serde")]
impl TryFrom<AttributeFields> for Attribute {
    type Error = SyntaxError;

    fn try_from(fields: AttributeFields) -> Result<Self, Self::Error> {
        Attribute::with_key_grammar(fields.name, fields.value, KeyGrammar::Wildcard)
    }
}
