//! Delimiter table: the fixed set of start/end marker pairs.
//!
//! The table is immutable configuration, loaded once and shared read-only
//! between scanners (and threads). It is always an explicit value handed to
//! the scanner — never hidden global state — so scanners over different
//! dialects can coexist.
//!
//! Lookup is longest-match: among candidate start markers at a position, the
//! longest wins. This is what lets the modifier opener `{{!` shadow the
//! plain `{{` without breaking recognition.

use crate::cursor::Cursor;
use crate::token::TokenKind;

/// One start/end marker pair and the token kind it introduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiter {
    /// Start marker, e.g. `{%`. ASCII, 2-3 bytes.
    pub start: &'static str,
    /// End marker, e.g. `%}`. ASCII, 2 bytes.
    pub end: &'static str,
    /// Kind of token a span bracketed by this pair produces.
    pub kind: TokenKind,
    /// Whether occurrences of `start` inside an open span of this kind are
    /// absorbed atomically (comment nesting) rather than read byte-wise.
    /// Start markers of nestable kinds also cut short open spans of
    /// non-nestable kinds.
    pub nestable: bool,
}

/// The Weft dialect: `{{ expr }}`, `{{! raw }}`, `{% tag %}`, `{# comment #}`.
///
/// Plain text between markers is the implicit `Literal` kind and needs no
/// table entry. The modifier opener `{{!` precedes `{{` for readability only;
/// lookup is longest-match regardless of order.
pub const WEFT_DIALECT: &[Delimiter] = &[
    Delimiter {
        start: "{{!",
        end: "}}",
        kind: TokenKind::Expression,
        nestable: false,
    },
    Delimiter {
        start: "{{",
        end: "}}",
        kind: TokenKind::Expression,
        nestable: false,
    },
    Delimiter {
        start: "{%",
        end: "%}",
        kind: TokenKind::Tag,
        nestable: false,
    },
    Delimiter {
        start: "{#",
        end: "#}",
        kind: TokenKind::Comment,
        nestable: true,
    },
];

/// Immutable delimiter lookup table.
///
/// A thin `Copy` wrapper over a `'static` slice of [`Delimiter`] entries;
/// [`Default`] is [`WEFT_DIALECT`]. No side effects: lookups are pure
/// functions of the table and the bytes at the cursor.
#[derive(Clone, Copy, Debug)]
pub struct DelimiterTable {
    entries: &'static [Delimiter],
}

impl DelimiterTable {
    /// Create a table over a custom dialect.
    ///
    /// # Contract
    ///
    /// Every start marker must begin with the same leading byte (`{` in the
    /// Weft dialect); the literal scanner relies on this to jump between
    /// candidate positions with `memchr`. Markers are ASCII and at most
    /// three bytes long (the buffer's zero padding covers three-byte
    /// probes at end-of-input).
    pub fn new(entries: &'static [Delimiter]) -> Self {
        debug_assert!(!entries.is_empty(), "delimiter table must not be empty");
        debug_assert!(
            entries
                .iter()
                .all(|d| d.start.as_bytes()[0] == entries[0].start.as_bytes()[0]),
            "start markers must share a leading byte"
        );
        debug_assert!(
            entries
                .iter()
                .all(|d| d.start.is_ascii() && d.end.is_ascii() && d.start.len() <= 3),
            "markers must be short ASCII"
        );
        Self { entries }
    }

    /// The byte every start marker begins with (`{` in the Weft dialect).
    ///
    /// The literal scanner jumps from one occurrence of this byte to the
    /// next; positions without it can never start a delimited token.
    #[inline]
    pub fn leading_byte(&self) -> u8 {
        self.entries[0].start.as_bytes()[0]
    }

    /// Report which delimiter's start marker matches at the cursor
    /// position, if any. Longest-match precedence among candidates.
    ///
    /// Matching reads at most three bytes via the cursor's sentinel-safe
    /// probes, so it never matches past end-of-input (marker bytes are
    /// never `0x00`).
    pub fn match_start(&self, cursor: &Cursor<'_>) -> Option<&'static Delimiter> {
        self.entries
            .iter()
            .filter(|d| Self::marker_at(cursor, d.start))
            .max_by_key(|d| d.start.len())
    }

    /// Whether the start marker of `delimiter` sits at the cursor position.
    #[inline]
    pub fn start_at(cursor: &Cursor<'_>, delimiter: &Delimiter) -> bool {
        Self::marker_at(cursor, delimiter.start)
    }

    /// Whether the end marker of `delimiter` sits at the cursor position.
    #[inline]
    pub fn end_at(cursor: &Cursor<'_>, delimiter: &Delimiter) -> bool {
        Self::marker_at(cursor, delimiter.end)
    }

    /// Whether `marker` (1-3 ASCII bytes) sits at the cursor position.
    #[inline]
    fn marker_at(cursor: &Cursor<'_>, marker: &str) -> bool {
        let m = marker.as_bytes();
        m[0] == cursor.current()
            && (m.len() < 2 || m[1] == cursor.peek())
            && (m.len() < 3 || m[2] == cursor.peek2())
    }
}

impl Default for DelimiterTable {
    fn default() -> Self {
        Self::new(WEFT_DIALECT)
    }
}
