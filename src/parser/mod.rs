/*!
parser module maintains the RPSL parsing pipeline: [tokenizer] splits the raw bytes of an
object into key/value spans, [normalizer] cleans them into [Attribute][crate::Attribute]s,
and [assembler] groups lines into [RpslObject]s at blank-line boundaries.

[RpslParser] drives the pipeline over any buffered reader, one line at a time.
*/
pub mod assembler;
pub mod iters;
pub mod normalizer;
pub mod tokenizer;

pub use assembler::ObjectAssembler;
pub use iters::ObjectIterator;
pub use tokenizer::{KeyGrammar, RawAttribute, Tokenizer};

use crate::error::ParserError;
use crate::models::RpslObject;
use std::io::{BufRead, BufReader, Read};

#[cfg(feature = "oneio")]
use crate::io::get_reader;

/// Knobs for [RpslParser].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Characters accepted in attribute keys.
    pub key_grammar: KeyGrammar,
    /// Log a warning when a value holds bytes that are not valid UTF-8.
    pub show_warnings: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            key_grammar: KeyGrammar::Standard,
            show_warnings: true,
        }
    }
}

pub struct RpslParser<R> {
    pub(crate) reader: R,
    pub(crate) options: ParserOptions,
}

#[cfg(feature = "oneio")]
impl RpslParser<BufReader<Box<dyn Read + Send>>> {
    /// Creating a new parser from a file path, local or remote. Compressed files (`.gz`,
    /// `.bz2`) are decompressed on the fly.
    pub fn new(path: &str) -> Result<Self, ParserError> {
        let reader = get_reader(path)?;
        Ok(RpslParser::from_read(reader))
    }
}

impl<R: Read> RpslParser<BufReader<R>> {
    /// Creating a new parser from an object that implements [Read] trait.
    pub fn from_read(reader: R) -> Self {
        RpslParser::from_reader(BufReader::new(reader))
    }
}

impl<R: BufRead> RpslParser<R> {
    /// Creating a new parser from an object that implements [BufRead] trait.
    pub fn from_reader(reader: R) -> Self {
        RpslParser {
            reader,
            options: ParserOptions::default(),
        }
    }

    /// Reads the whole source and returns every object in it.
    pub fn parse_many(self) -> Result<Vec<RpslObject>, ParserError> {
        self.into_object_iter().collect()
    }

    /// Returns the only object of the source.
    ///
    /// Fails with [ParserError::NoObjectsFound] if there is none and with
    /// [ParserError::MultipleObjectsFound] as soon as a second object is complete; the rest
    /// of the source is not read.
    pub fn parse_one(self) -> Result<RpslObject, ParserError> {
        let mut iter = self.into_object_iter();
        let obj = match iter.next() {
            Some(obj) => obj?,
            None => return Err(ParserError::NoObjectsFound),
        };
        match iter.next() {
            None => Ok(obj),
            Some(Err(e)) => Err(e),
            Some(Ok(_)) => Err(ParserError::MultipleObjectsFound),
        }
    }
}

impl<R> RpslParser<R> {
    pub fn with_options(self, options: ParserOptions) -> Self {
        RpslParser {
            reader: self.reader,
            options,
        }
    }

    pub fn with_key_grammar(self, key_grammar: KeyGrammar) -> Self {
        let options = ParserOptions {
            key_grammar,
            ..self.options
        };
        self.with_options(options)
    }

    pub fn disable_warnings(self) -> Self {
        let options = ParserOptions {
            show_warnings: false,
            ..self.options
        };
        self.with_options(options)
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::io::Cursor;
    use std::sync::{Mutex, Once};

    /// Keeps every warning logged by the test binary.
    struct WarningLog {
        messages: Mutex<Vec<String>>,
    }

    impl Log for WarningLog {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if record.level() == Level::Warn {
                self.messages.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static WARNINGS: WarningLog = WarningLog {
        messages: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn warnings_about(key: &str) -> usize {
        INIT.call_once(|| {
            log::set_logger(&WARNINGS).unwrap();
            log::set_max_level(LevelFilter::Warn);
        });
        let needle = format!("'{}'", key);
        WARNINGS
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|msg| msg.contains(&needle))
            .count()
    }

    #[test]
    fn test_options_builder() {
        let parser = RpslParser::from_reader(Cursor::new(Vec::<u8>::new()));
        assert_eq!(parser.options(), &ParserOptions::default());

        let parser = parser
            .with_key_grammar(KeyGrammar::Wildcard)
            .disable_warnings();
        assert_eq!(parser.options().key_grammar, KeyGrammar::Wildcard);
        assert!(!parser.options().show_warnings);
    }

    #[test]
    fn test_parse_one_cardinality() {
        let parser = RpslParser::from_reader(Cursor::new(""));
        assert!(matches!(parser.parse_one(), Err(ParserError::NoObjectsFound)));

        let parser = RpslParser::from_reader(Cursor::new("person: a\n\nperson: b\n\nperson: c"));
        assert!(matches!(
            parser.parse_one(),
            Err(ParserError::MultipleObjectsFound)
        ));

        // a syntax error right after the first object still wins
        let parser = RpslParser::from_reader(Cursor::new("person: a\n\nbad key: b\n"));
        assert!(matches!(parser.parse_one(), Err(ParserError::SyntaxError(_))));

        let parser = RpslParser::from_reader(Cursor::new("person: a\nsource: X\n"));
        let obj = parser.parse_one().unwrap();
        assert_eq!(obj.len(), 2);
    }

    #[test]
    fn test_wildcard_keys() {
        let input = "*mt: DEV-MNT\n*sr: DEV";
        let parser = RpslParser::from_reader(Cursor::new(input));
        assert!(matches!(parser.parse_many(), Err(ParserError::SyntaxError(_))));

        let parser =
            RpslParser::from_reader(Cursor::new(input)).with_key_grammar(KeyGrammar::Wildcard);
        let obj = parser.parse_one().unwrap();
        assert_eq!(obj.keys(), vec!["*mt", "*sr"]);
    }

    #[test]
    fn test_invalid_utf8_warnings() {
        assert_eq!(warnings_about("descr-loud"), 0);

        let input: &[u8] = b"descr-loud: caf\xe9\n";
        let obj = RpslParser::from_reader(input).parse_one().unwrap();
        assert_eq!(obj.get_first("descr-loud"), Some("caf\u{FFFD}"));
        assert_eq!(warnings_about("descr-loud"), 1);

        let input: &[u8] = b"descr-quiet: caf\xe9\n";
        let obj = RpslParser::from_reader(input)
            .disable_warnings()
            .parse_one()
            .unwrap();
        assert_eq!(obj.get_first("descr-quiet"), Some("caf\u{FFFD}"));
        assert_eq!(warnings_about("descr-quiet"), 0);
    }

    #[test]
    fn test_from_read() {
        let raw: &[u8] = b"person: Jane Smith\naddress: 456 Example Ave\nsource: RIPE";
        let obj = RpslParser::from_read(raw).parse_one().unwrap();
        assert_eq!(obj.get_first("address"), Some("456 Example Ave"));
    }
}
