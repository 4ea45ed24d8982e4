//! The `lex` command: dump the token stream of a spell.

use rune_parse::{lex, TokenKind};

use super::read_file;

/// Lex a file and display its tokens.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    print!("{}", render_tokens(path, &content));
}

/// Token listing, one `kind @ span` per line. Newlines are left out.
pub fn render_tokens(path: &str, source: &str) -> String {
    let tokens: Vec<_> = lex(source)
        .into_iter()
        .filter(|tok| tok.kind != TokenKind::Newline)
        .collect();
    let mut text = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for tok in &tokens {
        text.push_str(&format!("  {} @ {}\n", tok.kind, tok.span));
    }
    text
}
