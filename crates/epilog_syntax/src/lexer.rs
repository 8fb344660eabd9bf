//! Lexer for the Java subset.
//!
//! The lexer converts source text into a stream of tokens. It is tolerant by
//! construction: unexpected characters become `Error` tokens rather than
//! failing, so one stray character never sinks a whole file.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for Java source code.
///
/// The lexer iterates through source text and produces tokens.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            '[' => {
                self.advance();
                TokenKind::LBracket
            }
            ']' => {
                self.advance();
                TokenKind::RBracket
            }
            ';' => {
                self.advance();
                TokenKind::Semi
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '.' => {
                self.advance();
                TokenKind::Dot
            }
            '@' => {
                self.advance();
                TokenKind::At
            }
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::Punct('=')
                } else {
                    TokenKind::Eq
                }
            }
            '/' => match self.peek_char_n(1) {
                Some('/') => self.scan_line_comment(),
                Some('*') => self.scan_block_comment(),
                _ => {
                    self.advance();
                    TokenKind::Punct('/')
                }
            },
            '"' => self.scan_string(),
            '\'' => self.scan_char(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_ident_start(c) => self.scan_ident(),
            c => {
                self.advance();
                TokenKind::Punct(c)
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output. The final token is always `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a `//` comment through the end of the line.
    fn scan_line_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::LineComment(text)
    }

    /// Scans a `/* ... */` comment.
    fn scan_block_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        // consume "/*"
        text.push('/');
        self.advance();
        text.push('*');
        self.advance();
        while let Some(c) = self.peek_char() {
            if c == '*' && self.peek_char_n(1) == Some('/') {
                self.advance();
                self.advance();
                text.push_str("*/");
                return TokenKind::BlockComment(text);
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Error("unterminated block comment".to_string())
    }

    /// Scans a string literal, unescaping common escapes.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // opening quote
        let mut value = String::new();
        while let Some(c) = self.peek_char() {
            match c {
                '"' => {
                    self.advance();
                    return TokenKind::StringLit(value);
                }
                '\\' => {
                    self.advance();
                    match self.peek_char() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('"') => value.push('"'),
                        Some('\\') => value.push('\\'),
                        Some('\'') => value.push('\''),
                        Some(other) => {
                            // Unknown escape: keep it verbatim.
                            value.push('\\');
                            value.push(other);
                        }
                        None => break,
                    }
                    self.advance();
                }
                '\n' => break,
                _ => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        TokenKind::Error("unterminated string literal".to_string())
    }

    /// Scans a character literal, keeping the interior raw.
    fn scan_char(&mut self) -> TokenKind {
        self.advance(); // opening quote
        let mut value = String::new();
        while let Some(c) = self.peek_char() {
            match c {
                '\'' => {
                    self.advance();
                    return TokenKind::CharLit(value);
                }
                '\\' => {
                    value.push(c);
                    self.advance();
                    if let Some(escaped) = self.peek_char() {
                        value.push(escaped);
                        self.advance();
                    }
                }
                '\n' => break,
                _ => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        TokenKind::Error("unterminated character literal".to_string())
    }

    /// Scans a numeric literal as raw text.
    ///
    /// Covers ints, floats, hex, underscores, and type suffixes without
    /// interpreting any of them; the parser never needs the value.
    fn scan_number(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else if c == '.' && self.peek_char_n(1).is_some_and(|d| d.is_ascii_digit()) {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Number(text)
    }

    /// Scans an identifier or keyword.
    fn scan_ident(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if is_ident_continue(c) {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Ident(text)
    }
}

/// Returns true if the character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Returns true if the character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
