//! Function boundary location.
//!
//! Given a matched brace pair, this module decides whether the braces are a
//! function body and, if so, computes the two spans selection expansion
//! steps through: the signature span (introducing token through the closing
//! brace) and the declaration span (signature extended over an enclosing
//! assignment or property key, plus a trailing terminator).
//!
//! Recognized function forms:
//!
//! - `function f(a, b) { ... }` and anonymous `function (a) { ... }`,
//!   including `function*` generators and an `async` prefix
//! - `(a, b) => { ... }` and `a => { ... }` arrow functions with block
//!   bodies, including an `async` prefix
//! - `name(a) { ... }`, `[key](a) { ... }` object/class method shorthand,
//!   including `*`, `get`, `set`, `async`, and `static` prefixes
//!
//! Control headers (`if (...) {`, `for (...) {`, ...) never match because
//! their keywords are not identifiers.

use text_size::{TextRange, TextSize};

use crate::braces::BracePair;
use crate::lexer::{Token, TokenKind};

/// A function recognized at a brace pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionBoundary {
    /// The braces delimiting the function body.
    pub body: BracePair,
    /// Introducing token (keyword, parameter list, or method name) through
    /// the closing brace.
    pub signature: TextRange,
    /// The signature extended over an enclosing `var x =` / `obj.x =` /
    /// `key:` construct and a trailing `;` or `,`. Equals the signature when
    /// there is no such construct.
    pub declaration: TextRange,
}

/// Decides whether `pair` delimits a function body.
///
/// Returns `None` for braces that are anything else (blocks, object
/// literals, class bodies); the expansion loop treats those as transparent
/// and keeps searching outward.
#[must_use]
pub fn locate(source: &str, tokens: &[Token], pair: BracePair) -> Option<FunctionBoundary> {
    let open_idx = index_of_token_at(tokens, pair.open)?;
    let before = prev_code(tokens, open_idx)?;

    let sig_start_idx = match tokens[before].kind {
        TokenKind::Arrow => arrow_signature_start(source, tokens, before)?,
        TokenKind::RParen => callable_signature_start(source, tokens, before)?,
        _ => return None,
    };

    let signature = TextRange::new(
        tokens[sig_start_idx].range.start(),
        pair.close + TextSize::from(1),
    );
    let declaration = declaration_span(tokens, sig_start_idx, pair, signature);

    Some(FunctionBoundary {
        body: pair,
        signature,
        declaration,
    })
}

/// Signature start for `... => {`: the parameter list or bare parameter.
fn arrow_signature_start(source: &str, tokens: &[Token], arrow_idx: usize) -> Option<usize> {
    let params = prev_code(tokens, arrow_idx)?;
    match tokens[params].kind {
        TokenKind::RParen => {
            let lparen = matching_open(tokens, params, TokenKind::LParen, TokenKind::RParen)?;
            Some(async_prefixed(source, tokens, lparen))
        }
        TokenKind::Ident => Some(async_prefixed(source, tokens, params)),
        _ => None,
    }
}

/// Signature start for `... ( params ) {`: a `function` keyword or a method
/// name, or `None` for control headers and other non-function braces.
fn callable_signature_start(source: &str, tokens: &[Token], rparen_idx: usize) -> Option<usize> {
    let lparen = matching_open(tokens, rparen_idx, TokenKind::LParen, TokenKind::RParen)?;
    let before_params = prev_code(tokens, lparen)?;

    match tokens[before_params].kind {
        // `function (a) {`
        TokenKind::KwFunction => Some(function_keyword_start(source, tokens, before_params)),
        TokenKind::Ident => {
            match prev_code(tokens, before_params) {
                // `function name(a) {`
                Some(f) if tokens[f].kind == TokenKind::KwFunction => {
                    Some(function_keyword_start(source, tokens, f))
                }
                // `function* name(a) {` or `*name(a) {` method
                Some(star) if is_star(source, &tokens[star]) => match prev_code(tokens, star) {
                    Some(f) if tokens[f].kind == TokenKind::KwFunction => {
                        Some(function_keyword_start(source, tokens, f))
                    }
                    _ => Some(star),
                },
                // `get name(a) {`, `static name(a) {`, ...
                Some(m) if is_method_modifier(source, &tokens[m]) => Some(m),
                // `name(a) {` method shorthand
                _ => Some(before_params),
            }
        }
        // `[key](a) {` computed method key
        TokenKind::RBracket => {
            matching_open(tokens, before_params, TokenKind::LBracket, TokenKind::RBracket)
        }
        // `function* (a) {` anonymous generator
        _ if is_star(source, &tokens[before_params]) => {
            let f = prev_code(tokens, before_params)?;
            if tokens[f].kind == TokenKind::KwFunction {
                Some(function_keyword_start(source, tokens, f))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Pulls an `async` prefix into the signature when present.
fn async_prefixed(source: &str, tokens: &[Token], start_idx: usize) -> usize {
    match prev_code(tokens, start_idx) {
        Some(a) if tokens[a].kind == TokenKind::Ident && token_text(source, &tokens[a]) == "async" => {
            a
        }
        _ => start_idx,
    }
}

fn function_keyword_start(source: &str, tokens: &[Token], kw_idx: usize) -> usize {
    async_prefixed(source, tokens, kw_idx)
}

/// Extends the signature backward over an enclosing assignment target or
/// property key, and forward over a trailing `;` or `,`.
fn declaration_span(
    tokens: &[Token],
    sig_start_idx: usize,
    pair: BracePair,
    signature: TextRange,
) -> TextRange {
    let Some(before_sig) = prev_code(tokens, sig_start_idx) else {
        return signature;
    };
    let decl_start = match tokens[before_sig].kind {
        TokenKind::Eq => assignment_target_start(tokens, before_sig),
        TokenKind::Colon => property_key_start(tokens, before_sig),
        _ => None,
    };
    let Some(start_idx) = decl_start else {
        return signature;
    };

    let end = match index_of_token_at(tokens, pair.close).and_then(|c| next_code(tokens, c)) {
        Some(t) if matches!(tokens[t].kind, TokenKind::Semicolon | TokenKind::Comma) => {
            tokens[t].range.end()
        }
        _ => signature.end(),
    };

    TextRange::new(tokens[start_idx].range.start(), end)
}

/// Start of the `a`, `obj.b`, `this.c` chain on the left of an `=`, pulled
/// back further to a leading `var`/`let`/`const`.
fn assignment_target_start(tokens: &[Token], eq_idx: usize) -> Option<usize> {
    let mut cur = prev_code(tokens, eq_idx)?;
    if !matches!(tokens[cur].kind, TokenKind::Ident | TokenKind::KwThis) {
        return None;
    }
    loop {
        let Some(dot) = prev_code(tokens, cur) else {
            break;
        };
        if tokens[dot].kind != TokenKind::Dot {
            break;
        }
        let Some(head) = prev_code(tokens, dot) else {
            break;
        };
        if !matches!(tokens[head].kind, TokenKind::Ident | TokenKind::KwThis) {
            break;
        }
        cur = head;
    }
    match prev_code(tokens, cur) {
        Some(kw) if tokens[kw].kind.is_declaration_keyword() => Some(kw),
        _ => Some(cur),
    }
}

/// Start of the property key on the left of a `:`.
fn property_key_start(tokens: &[Token], colon_idx: usize) -> Option<usize> {
    let key = prev_code(tokens, colon_idx)?;
    match tokens[key].kind {
        TokenKind::Ident | TokenKind::StringLiteral | TokenKind::NumberLiteral => Some(key),
        TokenKind::RBracket => {
            matching_open(tokens, key, TokenKind::LBracket, TokenKind::RBracket)
        }
        _ => None,
    }
}

/// Index of the token starting exactly at `offset`.
fn index_of_token_at(tokens: &[Token], offset: TextSize) -> Option<usize> {
    let idx = tokens.partition_point(|t| t.range.start() < offset);
    (idx < tokens.len() && tokens[idx].range.start() == offset).then_some(idx)
}

/// Previous non-trivia token before `idx`.
fn prev_code(tokens: &[Token], idx: usize) -> Option<usize> {
    tokens[..idx].iter().rposition(|t| !t.kind.is_trivia())
}

/// Next non-trivia token after `idx`.
fn next_code(tokens: &[Token], idx: usize) -> Option<usize> {
    tokens[idx + 1..]
        .iter()
        .position(|t| !t.kind.is_trivia())
        .map(|p| idx + 1 + p)
}

/// Backward scan from a closing delimiter to its matching opener.
fn matching_open(
    tokens: &[Token],
    close_idx: usize,
    open: TokenKind,
    close: TokenKind,
) -> Option<usize> {
    let mut depth = 0usize;
    for j in (0..close_idx).rev() {
        let kind = tokens[j].kind;
        if kind == close {
            depth += 1;
        } else if kind == open {
            if depth == 0 {
                return Some(j);
            }
            depth -= 1;
        }
    }
    None
}

fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[usize::from(token.range.start())..usize::from(token.range.end())]
}

fn is_star(source: &str, token: &Token) -> bool {
    token.kind == TokenKind::Operator && token_text(source, token) == "*"
}

fn is_method_modifier(source: &str, token: &Token) -> bool {
    token.kind == TokenKind::Ident
        && matches!(token_text(source, token), "get" | "set" | "async" | "static")
}
