//! Low-level template tokenizer for Weft.
//!
//! This crate is the lexical front end of the Weft templating engine: it
//! turns raw template text into a flat sequence of typed [`Token`]s for the
//! parser and evaluator to consume. It is standalone — zero `weft_*`
//! dependencies — so external tools (highlighters, formatters, LSP) can use
//! it without pulling in the engine.
//!
//! # Pipeline
//!
//! ```text
//! &str -> TemplateBuffer -> TokenScanner -> Token, Token, ...
//! ```
//!
//! [`TemplateBuffer`] copies the text into a sentinel-terminated buffer;
//! [`TokenScanner`] pulls tokens off it one at a time, driven by a
//! [`DelimiterTable`] describing the dialect's marker pairs. Tokens borrow
//! their text from the buffer, and concatenating their `image`s in order
//! reconstructs the input byte-for-byte — malformed or truncated spans are
//! downgraded to literals rather than failing, so the lexer accepts any
//! input.
//!
//! # Example
//!
//! ```
//! use weft_lexer::{TemplateBuffer, TokenKind, TokenScanner};
//!
//! let buffer = TemplateBuffer::new("Hello {{ name }}!{# note #}");
//! let tokens: Vec<_> = TokenScanner::new(&buffer).collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[1].kind, TokenKind::Expression);
//! assert_eq!(tokens[1].content, "name");
//!
//! let rebuilt: String = tokens.iter().map(|t| t.image).collect();
//! assert_eq!(rebuilt, "Hello {{ name }}!{# note #}");
//! ```

mod cursor;
mod delimiter;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use delimiter::{Delimiter, DelimiterTable, WEFT_DIALECT};
pub use scanner::{ExhaustedInput, TokenScanner};
pub use source_buffer::TemplateBuffer;
pub use token::{Token, TokenKind};
