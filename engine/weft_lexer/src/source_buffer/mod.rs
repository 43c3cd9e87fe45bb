//! Sentinel-terminated template buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the template text,
//! allowing the scanner to detect end-of-input without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment, which also provides safe padding for
//! `peek()` and `peek2()` probes near the end of the buffer.
//!
//! # Interior Null Bytes
//!
//! A `&str` may legally contain U+0000, and template text flows through the
//! tokenizer byte-for-byte, so interior nulls are ordinary literal content
//! here. The [`Cursor`](crate::Cursor) tells them apart from the sentinel by
//! comparing its position against the content length.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the template text: the sentinel plus
/// enough padding that a three-byte start-marker probe (the widest marker,
/// `{{!`) starting at the last content byte stays in bounds.
const TAIL_ZEROS: usize = 4;

/// Sentinel-terminated template buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [template_bytes..., 0x00, padding_zeros...]
///  ^                  ^     ^
///  0                  |     rounded up to 64-byte boundary
///               source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`, followed by at least
/// three more zero bytes, ensuring safe reads for `peek()`, `peek2()`, and
/// whole-marker probes near the end of the buffer.
#[derive(Clone, Debug)]
pub struct TemplateBuffer {
    /// Owned buffer: `[template_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual template text (excludes sentinel and padding).
    source_len: u32,
}

impl TemplateBuffer {
    /// Create a new sentinel-terminated buffer from template text.
    ///
    /// Copies the text into a cache-line-aligned buffer with a `0x00`
    /// sentinel byte appended.
    ///
    /// # Input Size
    ///
    /// Templates larger than `u32::MAX` bytes (~4 GiB) are accepted but the
    /// `source_len` field saturates at `u32::MAX`; the enclosing engine
    /// rejects oversized templates upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary, leaving room for the
        // sentinel plus marker-probe padding.
        let padded_len = (source_len + TAIL_ZEROS).div_ceil(CACHE_LINE) * CACHE_LINE;

        // Allocate zero-filled buffer, then copy the template bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        // Saturate source_len to u32::MAX for oversized inputs.
        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the template bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the template text in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the template text is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Size assertion: `TemplateBuffer` should be <= 32 bytes on 64-bit
/// platforms. Vec<u8> = 24, u32 = 4, + 4 padding = 32.
const _: () = assert!(std::mem::size_of::<TemplateBuffer>() <= 32);
