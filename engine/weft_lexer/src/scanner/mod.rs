//! Hand-written pull scanner producing one [`Token`] per call.
//!
//! The scanner is forward-only and non-restartable: it owns a cursor over a
//! sentinel-terminated [`TemplateBuffer`](crate::TemplateBuffer) and walks
//! it monotonically. Re-scanning means building a fresh scanner over the
//! same buffer.
//!
//! # Design
//!
//! Each `next_token()` call dispatches on whether a start marker sits at
//! the cursor: yes enters a delimited scan for that marker's kind, no
//! collects a literal run up to the next marker (or end-of-input). Literal
//! runs jump between `{` candidates with `memchr`; delimited scans walk
//! character by character because escapes and nested openers are
//! position-dependent.
//!
//! # Malformed Input
//!
//! The scanner never fails on template text. A delimited span that reaches
//! end-of-input without its close marker, or that runs into a comment
//! opener, is downgraded to a `Literal` token covering exactly the bytes
//! consumed — total input coverage is preserved and strictness is deferred
//! to the parser. The only error this module knows is [`ExhaustedInput`],
//! the consumer-side mistake of pulling past the end.

use crate::cursor::Cursor;
use crate::delimiter::{Delimiter, DelimiterTable};
use crate::source_buffer::TemplateBuffer;
use crate::token::{Token, TokenKind};

/// Usage error: `next_token()` was called after the input was exhausted.
///
/// This is a programming error in the consumer, not a statement about the
/// template — malformed templates still tokenize (see module docs). Check
/// [`TokenScanner::has_more()`] before pulling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("next_token() called past end of input ({source_len} bytes already consumed)")]
pub struct ExhaustedInput {
    /// Total length of the fully-consumed template.
    pub source_len: u32,
}

/// Snapshot of the cursor state at a token's first character.
#[derive(Clone, Copy, Debug)]
struct Mark {
    pos: u32,
    line: u32,
    column: u32,
}

/// Pull-based template tokenizer.
///
/// Produces tokens one at a time; draining it reconstructs the input
/// byte-for-byte through the tokens' `image` fields. Single-threaded and
/// synchronous: each pull is a bounded computation over the remaining
/// input, with no I/O and no suspension points. Independent scanners over
/// the same buffer share nothing but the read-only buffer and table.
pub struct TokenScanner<'src> {
    cursor: Cursor<'src>,
    table: DelimiterTable,
}

impl<'src> TokenScanner<'src> {
    /// Create a scanner over `buffer` using the default Weft dialect.
    pub fn new(buffer: &'src TemplateBuffer) -> Self {
        Self::with_table(buffer, DelimiterTable::default())
    }

    /// Create a scanner over `buffer` with an explicit delimiter table.
    ///
    /// Tables are plain values, so scanners over different dialects can
    /// coexist freely.
    pub fn with_table(buffer: &'src TemplateBuffer, table: DelimiterTable) -> Self {
        Self {
            cursor: buffer.cursor(),
            table,
        }
    }

    /// Returns `true` while unconsumed input remains.
    pub fn has_more(&self) -> bool {
        !self.cursor.is_eof()
    }

    /// Produce the next token.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedInput`] when called with no input remaining;
    /// every other condition, including truncated or malformed delimited
    /// spans, produces a token.
    pub fn next_token(&mut self) -> Result<Token<'src>, ExhaustedInput> {
        if !self.has_more() {
            return Err(ExhaustedInput {
                source_len: self.cursor.source_len(),
            });
        }
        let start = self.mark();
        let token = match self.table.match_start(&self.cursor) {
            Some(delimiter) => self.delimited(start, delimiter),
            None => self.literal_run(start),
        };
        Ok(token)
    }

    /// Collect plain text from the mark up to the next start marker or
    /// end-of-input, and emit it as a `Literal`.
    ///
    /// Only called with at least one non-marker byte at the cursor, so the
    /// emitted token is never empty.
    fn literal_run(&mut self, start: Mark) -> Token<'src> {
        loop {
            if !self.cursor.skip_to_byte(self.table.leading_byte()) {
                // No candidate before end-of-input: the rest is literal.
                return self.emit_literal(start);
            }
            if self.table.match_start(&self.cursor).is_some() {
                return self.emit_literal(start);
            }
            // A lone `{` with no marker behind it is plain text.
            self.cursor.advance();
        }
    }

    /// Scan a delimited span whose start marker sits at the cursor.
    ///
    /// Walks the span character by character, honoring escape suppression,
    /// absorbing nested openers of nestable kinds, and closing at the first
    /// unescaped end marker. Two conditions downgrade the span to a
    /// `Literal` instead:
    ///
    /// - end-of-input before the close marker (token covers opener through
    ///   end of input);
    /// - for non-nestable kinds, a nestable kind's start marker appearing
    ///   mid-span (token is cut immediately before that marker, which
    ///   starts fresh on the next pull).
    fn delimited(&mut self, start: Mark, delimiter: &'static Delimiter) -> Token<'src> {
        self.cursor.advance_ascii(marker_len(delimiter.start));
        let end_bytes = delimiter.end.as_bytes();
        loop {
            if self.cursor.is_eof() {
                // Unterminated: degrade precision, never fail.
                return self.emit_literal(start);
            }
            if self.cursor.current() == b'\\' && end_bytes.contains(&self.cursor.peek()) {
                // Escaped end-marker byte: both bytes are ordinary content,
                // preserved verbatim for the parser to interpret.
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            if DelimiterTable::end_at(&self.cursor, delimiter) {
                self.cursor.advance_ascii(marker_len(delimiter.end));
                return self.emit_delimited(start, delimiter);
            }
            if delimiter.nestable {
                if DelimiterTable::start_at(&self.cursor, delimiter) {
                    // Nested opener absorbed whole, so its trailing byte
                    // cannot pair with a following byte into a close marker.
                    self.cursor.advance_ascii(marker_len(delimiter.start));
                    continue;
                }
            } else if self
                .table
                .match_start(&self.cursor)
                .is_some_and(|found| found.nestable)
            {
                // A comment opener takes precedence over an open
                // expression/tag scan: cut the span short here.
                return self.emit_literal(start);
            }
            self.cursor.advance_char();
        }
    }

    /// Emit everything from the mark to the cursor as a `Literal`.
    fn emit_literal(&self, start: Mark) -> Token<'src> {
        let image = self.cursor.slice_from(start.pos);
        Token {
            kind: TokenKind::Literal,
            image,
            content: image.trim(),
            line: start.line,
            column: start.column,
        }
    }

    /// Emit a completed delimited token; the cursor sits just past the end
    /// marker.
    fn emit_delimited(&self, start: Mark, delimiter: &'static Delimiter) -> Token<'src> {
        let image = self.cursor.slice_from(start.pos);
        let inner = &image[delimiter.start.len()..image.len() - delimiter.end.len()];
        Token {
            kind: delimiter.kind,
            image,
            content: inner.trim(),
            line: start.line,
            column: start.column,
        }
    }

    /// Snapshot the cursor position for the token about to be produced.
    fn mark(&self) -> Mark {
        Mark {
            pos: self.cursor.pos(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }
}

/// Marker length as `u32` for cursor arithmetic (markers are 1-3 bytes).
#[allow(
    clippy::cast_possible_truncation,
    reason = "markers are at most 3 bytes long"
)]
#[inline]
fn marker_len(marker: &str) -> u32 {
    marker.len() as u32
}

impl<'src> Iterator for TokenScanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token().ok()
    }
}

impl std::iter::FusedIterator for TokenScanner<'_> {}
