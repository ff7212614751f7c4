//! Tokens, the contract with the external lexer.
//!
//! The lexer produces [`Token`] values; this crate only consumes them.
//! Tokens are immutable, and their text is reference-counted so clones
//! share it - duplicating a tree never copies token data.

use std::fmt;
use std::sync::Arc;

use crate::Span;

/// Token kinds for the Sable scripting language.
///
/// Kinds carry no payload; the token itself holds the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Identifier: `health`, `OnUpdate`
    Ident,
    /// Integer literal: `42`
    Int,
    /// Float literal: `3.5`
    Float,
    /// String literal: `"..."`
    Str,

    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }
    Comma,    // ,
    Semi,     // ;

    Dot,              // .
    DotDollar,        // .$
    ColonColon,       // ::
    ColonColonDollar, // ::$

    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %

    Eq,    // =
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    Amp,      // &
    Pipe,     // |
    Caret,    // ^
    Tilde,    // ~
    Shl,      // <<
    Shr,      // >>
    AmpAmp,   // &&
    PipePipe, // ||
    Bang,     // !

    /// Generic error token for unrecognized input.
    Error,
    Eof,
}

impl TokenKind {
    /// True for the member-access operator family (`.`, `.$`, `::`, `::$`).
    ///
    /// These are written without surrounding whitespace in script source,
    /// and expression rendering reproduces that.
    #[inline]
    pub const fn is_member_access(self) -> bool {
        matches!(
            self,
            TokenKind::Dot
                | TokenKind::DotDollar
                | TokenKind::ColonColon
                | TokenKind::ColonColonDollar
        )
    }
}

/// A lexical unit with its source text and location.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub content: Arc<str>,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, content: impl Into<Arc<str>>, span: Span) -> Self {
        Token {
            kind,
            content: content.into(),
            span,
        }
    }

    /// Create a token with a dummy span, for tests and synthesized nodes.
    pub fn dummy(kind: TokenKind, content: impl Into<Arc<str>>) -> Self {
        Token::new(kind, content, Span::DUMMY)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.content, self.span)
    }
}

// Size assertions to prevent accidental regressions in frequently-allocated
// types.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // TokenKind (1) + Arc<str> (16) + Span (8), padded to 32 bytes.
    crate::static_assert_size!(Token, 32);
    crate::static_assert_size!(TokenKind, 1);
}
