//! Lexer for JavaScript source text.
//!
//! This module provides a lexer that tokenizes JavaScript source into a
//! stream of tokens with their positions in the source text. Regex literals
//! cannot be recognized by pattern alone (`/` is also the division
//! operator), so the lexer wraps the generated `logos` lexer and re-labels a
//! slash based on whether an expression can end at the previous significant
//! token.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Lexer for JavaScript source code.
///
/// The lexer is an iterator over tokens. It handles all error recovery
/// internally: unrecognized characters are returned as `TokenKind::Error`,
/// and unterminated strings, comments, and regex literals extend to the end
/// of the input rather than failing.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    regex_allowed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            // Start of input cannot end an expression.
            regex_allowed: true,
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();

        let mut kind = kind.unwrap_or(TokenKind::Error);
        let mut end = span.end;

        if self.regex_allowed && matches!(kind, TokenKind::Slash | TokenKind::SlashEq) {
            // Not a division after all: scan over the regex literal body.
            let extent = regex_extent(self.inner.remainder().as_bytes());
            self.inner.bump(extent);
            end += extent;
            kind = TokenKind::RegexLiteral;
        }

        if !kind.is_trivia() {
            self.regex_allowed = !kind.ends_expression();
        }

        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(end as u32),
        );
        Some(Token::new(kind, range))
    }
}

/// Number of bytes until (and including) the unescaped `/` closing a regex
/// literal body. A `/` inside a `[...]` character class does not terminate
/// the literal. Returns the full remainder when unterminated.
fn regex_extent(bytes: &[u8]) -> usize {
    let mut in_class = false;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' if in_class => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Lex the entire source and return all tokens.
///
/// This is a convenience function for callers that want the whole token
/// stream up front; the brace matcher and boundary locator work on the
/// resulting slice.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| {
            let text = &source[usize::from(token.range.start())..usize::from(token.range.end())];
            (token, text)
        })
        .collect()
}
