/*!
Groups physical lines into objects.

Lines are fed one at a time. Empty lines end the current object; lines starting with `%`
or `#` are dropped. Every other line is appended to the pending object buffer, which is
tokenized and normalized once the object is complete.
*/
use crate::error::SyntaxError;
use crate::models::RpslObject;
use crate::parser::normalizer::normalize;
use crate::parser::tokenizer::Tokenizer;
use crate::parser::ParserOptions;
use log::debug;

#[inline]
fn is_comment_line(line: &[u8]) -> bool {
    matches!(line.first(), Some(&b'%') | Some(&b'#'))
}

pub struct ObjectAssembler {
    options: ParserOptions,
    buffer: Vec<u8>,
    /// `(buffer position, input offset)` of the start of every line in `buffer`
    line_starts: Vec<(usize, usize)>,
    objects_count: usize,
}

impl Default for ObjectAssembler {
    fn default() -> Self {
        ObjectAssembler::new(ParserOptions::default())
    }
}

impl ObjectAssembler {
    pub fn new(options: ParserOptions) -> Self {
        ObjectAssembler {
            options,
            buffer: Vec::with_capacity(512),
            line_starts: Vec::with_capacity(16),
            objects_count: 0,
        }
    }

    /// Feeds one physical line, without its line terminator.
    ///
    /// `input_offset` is the byte offset of the line in the whole input and is only used for
    /// error reporting. Returns the finished object when the line closes one.
    pub fn push_line(
        &mut self,
        line: &[u8],
        input_offset: usize,
    ) -> Result<Option<RpslObject>, SyntaxError> {
        if line.is_empty() {
            return self.flush();
        }

        if is_comment_line(line) {
            return Ok(None);
        }

        if !self.buffer.is_empty() {
            self.buffer.push(b'\n');
        }
        self.line_starts.push((self.buffer.len(), input_offset));
        self.buffer.extend_from_slice(line);

        Ok(None)
    }

    /// Ends the input, returning the last object if there is one pending.
    pub fn finish(&mut self) -> Result<Option<RpslObject>, SyntaxError> {
        self.flush()
    }

    /// Number of objects produced so far.
    pub fn objects_count(&self) -> usize {
        self.objects_count
    }

    fn flush(&mut self) -> Result<Option<RpslObject>, SyntaxError> {
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let result = Tokenizer::new(&self.buffer, self.options.key_grammar)
            .map(|raw| raw.map(|raw| normalize(raw, self.options.show_warnings)))
            .collect::<Result<Vec<_>, _>>();

        let attributes = match result {
            Ok(attributes) => attributes,
            Err(e) => {
                let e = SyntaxError::new(e.kind, self.input_offset(e.offset));
                self.reset();
                return Err(e);
            }
        };
        self.reset();

        if attributes.is_empty() {
            return Ok(None);
        }

        self.objects_count += 1;
        debug!(
            "assembled object #{} with {} attributes",
            self.objects_count,
            attributes.len()
        );
        Ok(Some(RpslObject::new(attributes)))
    }

    /// Maps a position in the object buffer back to an offset in the input.
    fn input_offset(&self, buffer_pos: usize) -> usize {
        let idx = self
            .line_starts
            .partition_point(|(start, _)| *start <= buffer_pos)
            .saturating_sub(1);
        match self.line_starts.get(idx) {
            Some((start, offset)) => offset + (buffer_pos - start),
            None => buffer_pos,
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.line_starts.clear();
    }
}
