//! Integration tests for the lexer.

use epilog::syntax::{Lexer, TokenKind};

#[test]
fn tokenize_class_declaration() {
    let tokens = Lexer::tokenize_all("public class Foo {}");
    let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();
    assert!(matches!(kinds[0], TokenKind::Ident(s) if s == "public"));
    assert!(matches!(kinds[1], TokenKind::Ident(s) if s == "class"));
    assert!(matches!(kinds[2], TokenKind::Ident(s) if s == "Foo"));
    assert_eq!(*kinds[3], TokenKind::LBrace);
    assert_eq!(*kinds[4], TokenKind::RBrace);
    assert_eq!(*kinds[5], TokenKind::Eof);
}

#[test]
fn tokenize_annotation_with_array() {
    let tokens = Lexer::tokenize_all("@RequestMapping({\"/a\", \"/b\"})");
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds[0], TokenKind::At);
    assert!(kinds.contains(&TokenKind::StringLit("/a".to_string())));
    assert!(kinds.contains(&TokenKind::StringLit("/b".to_string())));
}

#[test]
fn tokenize_generics_as_punct() {
    let tokens = Lexer::tokenize_all("List<String> xs");
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::Punct('<')));
    assert!(kinds.contains(&TokenKind::Punct('>')));
}

#[test]
fn tokenize_block_comment_spans_lines() {
    let tokens = Lexer::tokenize_all("/* a\n   b */ int x;");
    assert!(matches!(&tokens[0].kind, TokenKind::BlockComment(s) if s.contains('\n')));
    assert!(tokens[1].is_ident("int"));
}

#[test]
fn tokenize_string_with_braces_and_semicolons() {
    let tokens = Lexer::tokenize_all("String s = \"{;}\";");
    assert!(
        tokens
            .iter()
            .any(|t| t.kind == TokenKind::StringLit("{;}".to_string()))
    );
    // Only the real terminator counts as a semicolon token.
    let semis = tokens.iter().filter(|t| t.kind == TokenKind::Semi).count();
    assert_eq!(semis, 1);
}

#[test]
fn eof_is_always_last() {
    for source in ["", "   ", "class C {}", "// only a comment"] {
        let tokens = Lexer::tokenize_all(source);
        assert_eq!(tokens.last().map(|t| t.kind.clone()), Some(TokenKind::Eof));
    }
}
