//! Token types for the Java subset.
//!
//! Tokens are the output of the lexer and input to the parser. Comments are
//! kept as tokens: instrumentation markers live in comments, and the parser
//! needs them positioned in the stream to keep markers attached to the
//! statements they precede.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LineComment(_) | TokenKind::BlockComment(_)
        )
    }

    /// Returns true if this token is an identifier with the given text.
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(s) if s == name)
    }
}

/// Token types for the Java subset.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Structure
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `@`
    At,
    /// `=` (assignment only; `==` lexes as `Punct('=')`)
    Eq,

    // Atoms
    /// Identifier or keyword like `class` or `getProduct`
    Ident(String),
    /// String literal; holds the unescaped value
    StringLit(String),
    /// Character literal; holds the raw interior
    CharLit(String),
    /// Numeric literal; holds the raw text
    Number(String),
    /// Any other punctuation or operator character
    Punct(char),

    // Meta
    /// `// ...` comment, without the trailing newline
    LineComment(String),
    /// `/* ... */` comment
    BlockComment(String),
    /// Unexpected input
    Error(String),
    /// End of input
    Eof,
}
