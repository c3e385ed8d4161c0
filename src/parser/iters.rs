/*!
Iterator over the objects of an RPSL source.

The source is read one physical line at a time, so only the object being assembled is
held in memory. Parsing errors are returned to the caller and end the iteration: once an
object boundary has been misread, nothing after it can be trusted.
*/
use crate::error::ParserError;
use crate::models::RpslObject;
use crate::parser::{ObjectAssembler, RpslParser};
use log::error;
use std::io::BufRead;

/// Use [ObjectIterator] as the default iterator for [RpslParser].
impl<R: BufRead> IntoIterator for RpslParser<R> {
    type Item = Result<RpslObject, ParserError>;
    type IntoIter = ObjectIterator<R>;

    fn into_iter(self) -> Self::IntoIter {
        ObjectIterator::new(self)
    }
}

impl<R> RpslParser<R> {
    pub fn into_object_iter(self) -> ObjectIterator<R> {
        ObjectIterator::new(self)
    }
}

pub struct ObjectIterator<R> {
    parser: RpslParser<R>,
    assembler: ObjectAssembler,
    line: Vec<u8>,
    /// input offset of the next line to read
    offset: usize,
    finished: bool,
}

impl<R> ObjectIterator<R> {
    pub(crate) fn new(parser: RpslParser<R>) -> Self {
        let assembler = ObjectAssembler::new(parser.options);
        ObjectIterator {
            parser,
            assembler,
            line: Vec::with_capacity(512),
            offset: 0,
            finished: false,
        }
    }

    /// Number of objects returned so far.
    pub fn objects_count(&self) -> usize {
        self.assembler.objects_count()
    }

    fn fail(&mut self, e: ParserError) -> Option<Result<RpslObject, ParserError>> {
        error!("parser error: {}", e);
        self.finished = true;
        Some(Err(e))
    }
}

/// Length of `line` without its `\n` terminator and one trailing `\r`.
#[inline]
fn content_len(line: &[u8]) -> usize {
    let mut len = line.len();
    if len > 0 && line[len - 1] == b'\n' {
        len -= 1;
    }
    if len > 0 && line[len - 1] == b'\r' {
        len -= 1;
    }
    len
}

impl<R: BufRead> Iterator for ObjectIterator<R> {
    type Item = Result<RpslObject, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.line.clear();
            let read = match self.parser.reader.read_until(b'\n', &mut self.line) {
                Ok(read) => read,
                Err(e) => return self.fail(e.into()),
            };

            if read == 0 {
                // end of input closes the last object
                self.finished = true;
                return match self.assembler.finish() {
                    Ok(obj) => obj.map(Ok),
                    Err(e) => self.fail(e.into()),
                };
            }

            let line_offset = self.offset;
            self.offset += read;
            let len = content_len(&self.line);
            match self.assembler.push_line(&self.line[..len], line_offset) {
                Ok(Some(obj)) => return Some(Ok(obj)),
                Ok(None) => {}
                Err(e) => return self.fail(e.into()),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxErrorKind;
    use std::io::{BufReader, Cursor, Read};

    #[test]
    fn test_content_len() {
        assert_eq!(content_len(b"abc\n"), 3);
        assert_eq!(content_len(b"abc\r\n"), 3);
        assert_eq!(content_len(b"abc"), 3);
        assert_eq!(content_len(b"\r\n"), 0);
        assert_eq!(content_len(b"\n"), 0);
        assert_eq!(content_len(b"abc\r\r\n"), 4);
    }

    #[test]
    fn test_iterates_objects_in_order() {
        let input = "person: a\nsource: X\n\nperson: b\nsource: Y\n\n\nperson: c\n";
        let parser = RpslParser::from_reader(Cursor::new(input));
        let mut iter = parser.into_object_iter();
        let names: Vec<String> = iter
            .by_ref()
            .map(|obj| obj.unwrap().get_first("person").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(iter.objects_count(), 3);
    }

    #[test]
    fn test_crlf_input() {
        let input = "person: a\r\nremarks: one\r\n two\r\n\r\nperson: b\r\n";
        let objects: Vec<RpslObject> = RpslParser::from_reader(Cursor::new(input))
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].get_first("remarks"), Some("one two"));
    }

    #[test]
    fn test_error_ends_iteration() {
        let input = "person: a\n\nbroken line\n\nperson: c\n";
        let mut iter = RpslParser::from_reader(Cursor::new(input)).into_object_iter();
        assert!(iter.next().unwrap().is_ok());
        match iter.next() {
            Some(Err(ParserError::SyntaxError(e))) => {
                assert_eq!(e.kind, SyntaxErrorKind::IllegalKeyCharacter(b' '));
                assert_eq!(e.offset, 17);
            }
            other => panic!("unexpected item: {:?}", other),
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_small_buffer_reader() {
        // a tiny buffer forces lines to be assembled from several reads
        let input: &[u8] = b"descr: first\n+second\n\tthird\nsource: TEST\n";
        let reader = BufReader::with_capacity(3, input);
        let obj = RpslParser::from_reader(reader).parse_one().unwrap();
        assert_eq!(obj.get_first("descr"), Some("first second third"));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_io_error() {
        let mut iter = RpslParser::from_read(FailingReader).into_object_iter();
        assert!(matches!(iter.next(), Some(Err(ParserError::IoError(_)))));
        assert!(iter.next().is_none());
    }
}
