//! Declaration-level parser for the Java subset.
//!
//! The parser converts a token stream into the Epilog declaration model. It
//! recognizes exactly what the instrumentation pass needs — annotations,
//! type and method structure, and statement boundaries — and carries
//! everything else through as verbatim text. No names are resolved and no
//! types are loaded; an annotation whose shape the parser cannot interpret
//! degrades to its printed form rather than failing the file.

use std::path::Path;

use epilog_model::{
    Annotation, Body, CompilationUnit, Error, ExprNode, Member, MethodDeclaration, Result,
    Statement, TypeDeclaration,
};

use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for Java source code.
pub struct Parser<'src> {
    /// Source text (for error messages and verbatim slices).
    source: &'src str,
    /// All tokens, comments included, ending with `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::tokenize_all(source),
            pos: 0,
        }
    }

    /// Parses the source into a compilation unit.
    ///
    /// # Errors
    /// Returns an error if the declaration structure cannot be recovered
    /// (unbalanced delimiters, truncated input).
    pub fn parse(&mut self, path: &Path) -> Result<CompilationUnit> {
        let (preamble, package) = self.parse_preamble();

        let mut types = Vec::new();
        loop {
            self.skip_comments();
            match self.current().kind {
                TokenKind::Eof => break,
                TokenKind::Semi => self.bump(),
                _ => types.push(self.parse_type(&package)?),
            }
        }

        Ok(CompilationUnit::new(path.to_path_buf(), preamble, types))
    }

    // =========================================================================
    // Preamble
    // =========================================================================

    /// Consumes the package declaration and imports, returning the verbatim
    /// preamble text and the package name.
    fn parse_preamble(&mut self) -> (String, String) {
        let mut end = 0;
        let mut package = String::new();

        self.skip_comments();
        if self.current().is_ident("package") {
            self.bump();
            loop {
                match &self.current().kind {
                    TokenKind::Ident(s) => package.push_str(s),
                    TokenKind::Dot => package.push('.'),
                    _ => break,
                }
                self.bump();
            }
            if self.current().kind == TokenKind::Semi {
                end = self.current().span.end;
                self.bump();
            }
        }

        loop {
            self.skip_comments();
            if !self.current().is_ident("import") {
                break;
            }
            self.bump();
            while !matches!(self.current().kind, TokenKind::Semi | TokenKind::Eof) {
                self.bump();
            }
            if self.current().kind == TokenKind::Semi {
                end = self.current().span.end;
                self.bump();
            }
        }

        (self.source[..end].trim_end().to_string(), package)
    }

    // =========================================================================
    // Type Declarations
    // =========================================================================

    /// Parses one top-level type declaration.
    fn parse_type(&mut self, package: &str) -> Result<TypeDeclaration> {
        let annotations = self.parse_annotations()?;
        self.skip_comments();

        let header_start = self.current().span.start;
        let mut keyword: Option<String> = None;
        let mut name = String::new();
        let mut angle = 0i32;
        let mut paren = 0i32;

        let body_open = loop {
            let span = self.current().span;
            match &self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_at(span, "expected '{' in type declaration"));
                }
                TokenKind::LBrace if angle == 0 && paren == 0 => {
                    self.bump();
                    break span;
                }
                TokenKind::LParen => {
                    paren += 1;
                    self.bump();
                }
                TokenKind::RParen => {
                    paren -= 1;
                    self.bump();
                }
                TokenKind::Punct('<') => {
                    angle += 1;
                    self.bump();
                }
                TokenKind::Punct('>') => {
                    angle -= 1;
                    self.bump();
                }
                TokenKind::Ident(s) => {
                    if keyword.is_none()
                        && matches!(s.as_str(), "class" | "interface" | "enum" | "record")
                    {
                        keyword = Some(s.clone());
                    } else if keyword.is_some() && name.is_empty() {
                        name = s.clone();
                    }
                    self.bump();
                }
                _ => self.bump(),
            }
        };

        if name.is_empty() {
            return Err(self.error_at(body_open, "type declaration has no name"));
        }

        let header = self.source[header_start..body_open.start].trim().to_string();
        let is_enum = keyword.as_deref() == Some("enum");
        let members = self.parse_members(&name, is_enum)?;

        let qualified_name = if package.is_empty() {
            name.clone()
        } else {
            format!("{package}.{name}")
        };

        Ok(TypeDeclaration {
            name,
            qualified_name,
            header,
            annotations,
            members,
        })
    }

    /// Parses members until the type body's closing brace.
    fn parse_members(&mut self, type_name: &str, is_enum: bool) -> Result<Vec<Member>> {
        let mut members = Vec::new();

        if is_enum {
            if let Some(raw) = self.parse_enum_constants() {
                members.push(Member::Raw(raw));
            }
        }

        loop {
            self.skip_comments();
            match self.current().kind {
                TokenKind::RBrace => {
                    self.bump();
                    return Ok(members);
                }
                TokenKind::Semi => self.bump(),
                TokenKind::Eof => {
                    return Err(self.error_here("unexpected end of input in type body"));
                }
                _ => members.push(self.parse_member(type_name)?),
            }
        }
    }

    /// Consumes the enum constant list through its terminating `;`, if any.
    ///
    /// Constants are never instrumented, so the whole list is one raw member.
    fn parse_enum_constants(&mut self) -> Option<String> {
        self.skip_comments();
        if self.current().kind == TokenKind::RBrace {
            return None;
        }

        let start = self.current().span.start;
        let mut depth = 0i32;
        let end = loop {
            let span = self.current().span;
            match self.current().kind {
                TokenKind::Eof => break span.start,
                TokenKind::RBrace if depth == 0 => break span.start,
                TokenKind::Semi if depth == 0 => {
                    self.bump();
                    break span.end;
                }
                TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => {
                    depth += 1;
                    self.bump();
                }
                TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                    depth -= 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        };

        let raw = self.source[start..end].trim().to_string();
        if raw.is_empty() { None } else { Some(raw) }
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Parses one member: a method, or anything else as verbatim text.
    ///
    /// The decision token is found by scanning forward at bracket depth
    /// zero: `=` or `;` first means a field, `{` first means an initializer
    /// or nested body, `(` first means a method or constructor.
    fn parse_member(&mut self, type_name: &str) -> Result<Member> {
        let member_start = self.current().span.start;
        let annotations = self.parse_annotations()?;
        self.skip_comments();
        let decl_start = self.current().span.start;

        let mut angle = 0i32;
        let mut last_ident = String::new();

        loop {
            let span = self.current().span;
            match &self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_at(span, "unexpected end of input in member"));
                }
                TokenKind::Ident(s) => {
                    if angle == 0
                        && matches!(s.as_str(), "class" | "interface" | "enum" | "record")
                    {
                        // Nested type: swallow through its balanced body.
                        let end = self.consume_through_braces()?;
                        return Ok(Member::Raw(self.slice(member_start, end)));
                    }
                    last_ident = s.clone();
                    self.bump();
                }
                TokenKind::Eq if angle == 0 => {
                    let end = self.consume_through_semi()?;
                    return Ok(Member::Raw(self.slice(member_start, end)));
                }
                TokenKind::Semi if angle == 0 => {
                    let end = span.end;
                    self.bump();
                    return Ok(Member::Raw(self.slice(member_start, end)));
                }
                TokenKind::LBrace if angle == 0 => {
                    self.bump();
                    let end = self.consume_balanced_braces()?;
                    return Ok(Member::Raw(self.slice(member_start, end)));
                }
                TokenKind::LParen => {
                    return self.parse_callable(
                        member_start,
                        decl_start,
                        annotations,
                        last_ident,
                        type_name,
                    );
                }
                TokenKind::Punct('<') => {
                    angle += 1;
                    self.bump();
                }
                TokenKind::Punct('>') => {
                    angle -= 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        }
    }

    /// Parses a method or constructor, positioned at the parameter `(`.
    ///
    /// Constructors are never instrumented and are kept as raw text.
    fn parse_callable(
        &mut self,
        member_start: usize,
        decl_start: usize,
        annotations: Vec<Annotation>,
        name: String,
        type_name: &str,
    ) -> Result<Member> {
        // Parameter list.
        self.bump();
        let mut depth = 1i32;
        while depth > 0 {
            match self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_here("unexpected end of input in parameter list"));
                }
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            self.bump();
        }

        // Throws clause and anything else before the body or `;`.
        loop {
            let span = self.current().span;
            match self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_at(span, "unexpected end of input in method header"));
                }
                TokenKind::Semi => {
                    self.bump();
                    if name.is_empty() || name == type_name {
                        return Ok(Member::Raw(self.slice(member_start, span.end)));
                    }
                    let header = self.source[decl_start..span.start].trim_end().to_string();
                    return Ok(Member::Method(MethodDeclaration {
                        name,
                        header,
                        annotations,
                        body: None,
                    }));
                }
                TokenKind::LBrace => {
                    self.bump();
                    let body_end = self.consume_balanced_braces()?;
                    if name.is_empty() || name == type_name {
                        return Ok(Member::Raw(self.slice(member_start, body_end)));
                    }
                    let header = self.source[decl_start..span.start].trim_end().to_string();
                    let inner = &self.source[span.end..body_end - 1];
                    return Ok(Member::Method(MethodDeclaration {
                        name,
                        header,
                        annotations,
                        body: Some(Body::new(split_statements(inner))),
                    }));
                }
                _ => self.bump(),
            }
        }
    }

    // =========================================================================
    // Annotations
    // =========================================================================

    /// Parses a run of annotations, comments allowed between them.
    fn parse_annotations(&mut self) -> Result<Vec<Annotation>> {
        let mut annotations = Vec::new();
        loop {
            self.skip_comments();
            if self.current().kind == TokenKind::At {
                annotations.push(self.parse_annotation()?);
            } else {
                return Ok(annotations);
            }
        }
    }

    /// Parses one annotation: `@Name`, `@a.b.Name(...)`.
    fn parse_annotation(&mut self) -> Result<Annotation> {
        let at_span = self.current().span;
        self.bump();

        let mut simple = String::new();
        let mut end = at_span.end;
        while let TokenKind::Ident(s) = &self.current().kind {
            simple = s.clone();
            end = self.current().span.end;
            self.bump();
            if self.current().kind == TokenKind::Dot {
                self.bump();
            } else {
                break;
            }
        }

        let mut args = Vec::new();
        if self.current().kind == TokenKind::LParen {
            self.bump();
            self.skip_comments();
            if self.current().kind != TokenKind::RParen {
                loop {
                    self.skip_comments();
                    let name = self.annotation_arg_name();
                    let expr = self.parse_annotation_expr()?;
                    args.push((name, expr));
                    if self.current().kind == TokenKind::Comma {
                        self.bump();
                    } else {
                        break;
                    }
                }
            }
            if self.current().kind != TokenKind::RParen {
                return Err(self.error_here("expected ')' in annotation"));
            }
            end = self.current().span.end;
            self.bump();
        }

        Ok(Annotation {
            kind: simple.to_lowercase(),
            text: self.slice(at_span.start, end),
            args,
        })
    }

    /// Consumes `name =` if present; a lone argument is named `value`.
    fn annotation_arg_name(&mut self) -> String {
        if let TokenKind::Ident(n) = &self.current().kind {
            let mut ahead = self.pos + 1;
            while self.tokens[ahead].is_comment() {
                ahead += 1;
            }
            if self.tokens[ahead].kind == TokenKind::Eq {
                let n = n.clone();
                self.pos = ahead + 1;
                return n;
            }
        }
        "value".to_string()
    }

    /// Parses one annotation argument expression.
    ///
    /// A lone string literal and an array literal are recognized; anything
    /// else is captured as its printed form. That opacity is deliberate —
    /// evaluating concatenations or constant references would need semantic
    /// analysis, which this parser must never perform.
    fn parse_annotation_expr(&mut self) -> Result<ExprNode> {
        self.skip_comments();
        if self.current().kind == TokenKind::LBrace {
            self.bump();
            let mut elements = Vec::new();
            loop {
                self.skip_comments();
                if self.current().kind == TokenKind::RBrace {
                    self.bump();
                    return Ok(ExprNode::ArrayLit(elements));
                }
                elements.push(self.parse_annotation_scalar(true)?);
                if self.current().kind == TokenKind::Comma {
                    self.bump();
                }
            }
        }
        self.parse_annotation_scalar(false)
    }

    /// Parses a scalar annotation expression, stopping at a `,` or the
    /// closing delimiter (`}` inside arrays, `)` otherwise) at depth zero.
    fn parse_annotation_scalar(&mut self, in_array: bool) -> Result<ExprNode> {
        let start = self.current().span.start;
        let mut end = start;
        let mut depth = 0i32;
        let mut count = 0usize;
        let mut lone: Option<TokenKind> = None;

        loop {
            let token = self.current();
            let stop = depth == 0
                && match token.kind {
                    TokenKind::Comma => true,
                    TokenKind::RBrace => in_array,
                    TokenKind::RParen => !in_array,
                    _ => false,
                };
            if stop {
                break;
            }
            match token.kind {
                TokenKind::Eof => {
                    return Err(self.error_here("unexpected end of input in annotation"));
                }
                TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => depth -= 1,
                _ => {}
            }
            count += 1;
            if count == 1 {
                lone = Some(token.kind.clone());
            }
            end = token.span.end;
            self.bump();
        }

        if count == 1 {
            if let Some(TokenKind::StringLit(s)) = lone {
                return Ok(ExprNode::StringLit(s));
            }
        }
        Ok(ExprNode::Other(self.slice(start, end)))
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Returns the current token.
    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Advances to the next token.
    fn bump(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    /// Skips comment tokens.
    fn skip_comments(&mut self) {
        while self.current().is_comment() {
            self.bump();
        }
    }

    /// Consumes tokens through the `;` terminating a field initializer.
    fn consume_through_semi(&mut self) -> Result<usize> {
        let mut depth = 0i32;
        loop {
            let span = self.current().span;
            match self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_at(span, "unexpected end of input in field"));
                }
                TokenKind::Semi if depth == 0 => {
                    self.bump();
                    return Ok(span.end);
                }
                TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => {
                    depth += 1;
                    self.bump();
                }
                TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                    depth -= 1;
                    self.bump();
                }
                _ => self.bump(),
            }
        }
    }

    /// Consumes a brace-balanced region whose opening `{` is already
    /// consumed; returns the byte offset just past the closing `}`.
    fn consume_balanced_braces(&mut self) -> Result<usize> {
        let mut depth = 1i32;
        loop {
            let span = self.current().span;
            match self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_at(span, "unexpected end of input in block"));
                }
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        return Ok(span.end);
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Consumes forward to the next `{`, then through its balanced body.
    fn consume_through_braces(&mut self) -> Result<usize> {
        loop {
            match self.current().kind {
                TokenKind::Eof => {
                    return Err(self.error_here("unexpected end of input before block"));
                }
                TokenKind::LBrace => {
                    self.bump();
                    return self.consume_balanced_braces();
                }
                _ => self.bump(),
            }
        }
    }

    /// Returns a verbatim source slice.
    fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].to_string()
    }

    /// Creates a parse error at the current token.
    fn error_here(&self, message: &str) -> Error {
        self.error_at(self.current().span, message)
    }

    /// Creates a parse error at the given span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(message, span.line, span.column, self.context_at(span))
    }

    /// Extracts the source line containing the given span.
    fn context_at(&self, span: Span) -> String {
        let start = self.source[..span.start.min(self.source.len())]
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);
        self.source[start..end].to_string()
    }
}

/// Parses one source file into a compilation unit.
///
/// # Errors
/// Returns an error if the declaration structure cannot be recovered.
pub fn parse_unit(source: &str, path: &Path) -> Result<CompilationUnit> {
    Parser::new(source).parse(path)
}

// =============================================================================
// Statement splitting
// =============================================================================

/// Splits a method body's interior text into statements.
///
/// Boundaries are `;` at nesting depth zero, or a `}` closing a depth-zero
/// block that is not continued by `else`, `catch`, `finally`, or the
/// `while` of a `do` statement. Comments attach to the statement that
/// follows them, which keeps instrumentation markers with their statement
/// across write/re-parse cycles.
#[must_use]
pub fn split_statements(body: &str) -> Vec<Statement> {
    let chars: Vec<(usize, char)> = body.char_indices().collect();
    let mut statements = Vec::new();
    let mut i = 0;
    let mut depth = 0i32;
    let mut stmt_start: Option<usize> = None;
    let mut stmt_is_do = false;

    let flush = |statements: &mut Vec<Statement>, start: usize, end: usize| {
        let text = body[start..end].trim().to_string();
        if !text.is_empty() {
            statements.push(Statement::new(text));
        }
    };

    while i < chars.len() {
        let (offset, c) = chars[i];

        if stmt_start.is_none() {
            if c.is_whitespace() {
                i += 1;
                continue;
            }
            stmt_start = Some(offset);
            stmt_is_do = first_word_at(&chars, i) == "do";
        }

        match c {
            '"' => {
                i = skip_string(&chars, i);
                continue;
            }
            '\'' => {
                i = skip_char_literal(&chars, i);
                continue;
            }
            '/' if matches!(chars.get(i + 1), Some((_, '/'))) => {
                while i < chars.len() && chars[i].1 != '\n' {
                    i += 1;
                }
                continue;
            }
            '/' if matches!(chars.get(i + 1), Some((_, '*'))) => {
                i += 2;
                while i < chars.len() {
                    if chars[i].1 == '*' && matches!(chars.get(i + 1), Some((_, '/'))) {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
                continue;
            }
            '{' | '(' | '[' => depth += 1,
            ')' | ']' => depth = (depth - 1).max(0),
            '}' => {
                depth = (depth - 1).max(0);
                if depth == 0 {
                    let next = first_word_at(&chars, i + 1);
                    let continues = matches!(next.as_str(), "else" | "catch" | "finally")
                        || (next == "while" && stmt_is_do);
                    if !continues {
                        if let Some(start) = stmt_start.take() {
                            flush(&mut statements, start, offset + 1);
                        }
                    }
                }
            }
            ';' => {
                if depth == 0 {
                    if let Some(start) = stmt_start.take() {
                        flush(&mut statements, start, offset + 1);
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    if let Some(start) = stmt_start {
        flush(&mut statements, start, body.len());
    }

    statements
}

/// Returns the next identifier-like word at or after the given index,
/// skipping whitespace and comments.
fn first_word_at(chars: &[(usize, char)], mut i: usize) -> String {
    loop {
        match chars.get(i) {
            Some((_, c)) if c.is_whitespace() => i += 1,
            Some((_, '/')) if matches!(chars.get(i + 1), Some((_, '/'))) => {
                while i < chars.len() && chars[i].1 != '\n' {
                    i += 1;
                }
            }
            Some((_, '/')) if matches!(chars.get(i + 1), Some((_, '*'))) => {
                i += 2;
                while i < chars.len() {
                    if chars[i].1 == '*' && matches!(chars.get(i + 1), Some((_, '/'))) {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            _ => break,
        }
    }
    let mut word = String::new();
    while let Some((_, c)) = chars.get(i) {
        if c.is_alphanumeric() || *c == '_' {
            word.push(*c);
            i += 1;
        } else {
            break;
        }
    }
    word
}

/// Advances past a string literal starting at the opening quote.
fn skip_string(chars: &[(usize, char)], mut i: usize) -> usize {
    i += 1;
    while i < chars.len() {
        match chars[i].1 {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    i
}

/// Advances past a character literal starting at the opening quote.
fn skip_char_literal(chars: &[(usize, char)], mut i: usize) -> usize {
    i += 1;
    while i < chars.len() {
        match chars[i].1 {
            '\\' => i += 2,
            '\'' => return i + 1,
            _ => i += 1,
        }
    }
    i
}
