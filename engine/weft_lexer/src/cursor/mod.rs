//! Position-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End-of-input is
//! detected by comparing the position against the template length, and the
//! sentinel (`0x00`) guarantees that `current()`, `peek()`, and `peek2()`
//! are safe at any position without bounds checks.
//!
//! Unlike a span-based lexer that recovers line numbers on demand, every
//! advance keeps the 1-based `line` and `column` current, so the scanner can
//! stamp each token with the position of its first character for free.
//! Columns count *characters*: a multi-byte UTF-8 sequence moves the column
//! by one, and `\n` resets it.

/// Position-tracking cursor over a sentinel-terminated byte buffer.
///
/// Created via [`TemplateBuffer::cursor()`](crate::TemplateBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, with at
/// least three further `0x00` bytes after it (marker-probe padding). This is
/// guaranteed by [`TemplateBuffer`](crate::TemplateBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (template + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual template text (excludes sentinel and padding).
    source_len: u32,
    /// 1-based line of the current position.
    line: u32,
    /// 1-based column (in characters) of the current position.
    column: u32,
}

/// Size assertion: Cursor should be <= 32 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 x 4 = 16 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

/// Count the characters in `bytes` by skipping UTF-8 continuation bytes.
///
/// Continuation bytes have the bit pattern `10xxxxxx`; everything else
/// (ASCII, leading bytes, and stray invalid bytes) starts a character.
fn char_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count()
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 1, column 1.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel), with zero padding after
    /// it. This is guaranteed by `TemplateBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at end-of-input (the sentinel byte). Interior
    /// null bytes also return `0x00`; use [`is_eof()`](Self::is_eof) to
    /// distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position: the sentinel and padding guarantee
    /// valid reads beyond the template text.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    ///
    /// Safe to call at any position: the buffer carries at least three zero
    /// bytes after the template text.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte, updating line and column.
    ///
    /// A `\n` byte increments the line and resets the column to 1; any
    /// other byte bumps the column. Callers advancing through multi-byte
    /// characters should use [`advance_char()`](Self::advance_char) instead
    /// so the column moves once per character.
    #[inline]
    pub fn advance(&mut self) {
        if self.current() == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Uses the current byte as the leading byte to determine how many
    /// bytes to skip; the column moves by one regardless of width.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        if width == 1 {
            self.advance();
        } else {
            self.column += 1;
            self.pos += width;
        }
    }

    /// Advance the cursor past `n` bytes of ASCII marker text.
    ///
    /// # Contract
    ///
    /// The skipped bytes must be ASCII and must not contain `\n` — true for
    /// every delimiter marker. The column moves by `n`.
    #[inline]
    pub fn advance_ascii(&mut self, n: u32) {
        debug_assert!(
            !self.buf[self.pos as usize..(self.pos + n) as usize].contains(&b'\n'),
            "marker text must not contain newlines"
        );
        self.pos += n;
        self.column += n;
    }

    /// Advance to the next occurrence of `byte` using SIMD-accelerated
    /// search, or to end-of-input if it does not occur.
    ///
    /// Returns `true` if the byte was found (cursor rests on it). Line and
    /// column are batch-updated over the skipped region: the line grows by
    /// the number of newlines skipped, and the column becomes the character
    /// distance from the last newline (or grows by the whole character
    /// count when no newline was skipped).
    pub fn skip_to_byte(&mut self, byte: u8) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(byte, remaining) {
            Some(offset) => {
                self.advance_over(offset);
                true
            }
            None => {
                self.advance_over(remaining.len());
                false
            }
        }
    }

    /// Batch-advance over `n` bytes, folding their newlines and characters
    /// into the line/column state.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "skipped region length <= source_len which fits in u32"
    )]
    fn advance_over(&mut self, n: usize) {
        let skipped = &self.buf[self.pos as usize..self.pos as usize + n];
        match memchr::memrchr(b'\n', skipped) {
            Some(last_newline) => {
                self.line += memchr::memchr_iter(b'\n', skipped).count() as u32;
                self.column = 1 + char_count(&skipped[last_newline + 1..]) as u32;
            }
            None => {
                self.column += char_count(skipped) as u32;
            }
        }
        self.pos += n as u32;
    }

    /// Returns `true` if the cursor has consumed the entire template.
    ///
    /// Interior null bytes are not EOF: only a position at or past the
    /// template length is.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the template.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column (in characters) of the current position.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Length of the template text (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a template substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the template text (`end <= source_len`)
    /// and on valid UTF-8 character boundaries. This is guaranteed when
    /// `start` and `end` come from the scanner's token boundary tracking,
    /// since the template was originally valid UTF-8 (`&str`) and token
    /// boundaries always sit on ASCII marker bytes or character starts.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on text originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer was constructed from `&str` (valid UTF-8), and
        // the scanner ensures start..end falls on character boundaries
        // within the template text.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a template substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests;
