use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn test_lex_invoke() {
    assert_eq!(
        kinds("INVOKE spirits x AND y FROM the mortal realm"),
        vec![
            TokenKind::Invoke,
            TokenKind::Spirit,
            ident("x"),
            TokenKind::And,
            ident("y"),
            TokenKind::From,
            ident("the"),
            ident("mortal"),
            ident("realm"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_ignore_case() {
    assert_eq!(
        kinds("channel The Essence of x"),
        vec![
            TokenKind::Channel,
            ident("The"),
            ident("Essence"),
            TokenKind::Of,
            ident("x"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        kinds("ending spiritual"),
        vec![ident("ending"), ident("spiritual"), TokenKind::Eof]
    );
}

#[test]
fn test_comments_and_newlines() {
    assert_eq!(
        kinds("# a comment\nSPEAK FORTH z # trailing\n"),
        vec![
            TokenKind::Newline,
            TokenKind::Speak,
            TokenKind::Forth,
            ident("z"),
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        kinds("x @ y"),
        vec![
            ident("x"),
            TokenKind::Error("@".to_string()),
            ident("y"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans() {
    let tokens = lex("WEAVE WITH y");
    assert_eq!(tokens[0].span, Span::new(0, 5));
    assert_eq!(tokens[2].span, Span::new(11, 12));
    assert_eq!(tokens[3].span, Span::new(12, 12));
}

#[test]
fn test_describe() {
    assert_eq!(TokenKind::Manifest.describe(), "`MANIFEST`");
    assert_eq!(ident("z").describe(), "`z`");
    assert_eq!(TokenKind::Newline.describe(), "end of line");
}
