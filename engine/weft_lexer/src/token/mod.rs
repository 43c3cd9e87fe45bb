//! Token data model: one lexical unit of a template.
//!
//! A [`Token`] is pure data — the scanner transfers it wholly to the
//! consumer and keeps no back-reference. The `image` field is the exact
//! input span including delimiters; concatenating every token's image in
//! emission order reconstructs the template byte-for-byte. The `content`
//! field is the trimmed logical text the parser works with.

use std::fmt;

/// The four disjoint kinds of template token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text with no delimiter semantics, or a downgraded
    /// malformed/unterminated span.
    Literal,
    /// A `{{ ... }}` span holding a value-producing construct.
    Expression,
    /// A `{% ... %}` span holding a control/statement construct.
    Tag,
    /// A `{# ... #}` span excluded from further interpretation.
    Comment,
}

impl TokenKind {
    /// Human-readable description, used in messages and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal text",
            TokenKind::Expression => "expression",
            TokenKind::Tag => "tag",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit of a template, borrowed zero-copy from the
/// [`TemplateBuffer`](crate::TemplateBuffer) it was scanned from.
///
/// Immutable once produced. Equality and hashing are value-based over all
/// fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Which kind of token this is.
    pub kind: TokenKind,
    /// The exact substring of the input this token spans, including its
    /// delimiters (if any) and all whitespace.
    pub image: &'src str,
    /// The logical inner text: for delimited kinds, the text between the
    /// start and end markers with surrounding whitespace stripped; for
    /// literals, the whitespace-stripped image.
    pub content: &'src str,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// 1-based column (in characters) of the token's first character.
    pub column: u32,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} at {}:{}",
            self.kind, self.image, self.line, self.column
        )
    }
}
