//! Brace matching over the token stream.
//!
//! Only `{`/`}` tokens participate in matching. Braces inside strings,
//! comments, and regex literals are part of those literal tokens, so they
//! never reach the depth counter.

use text_size::{TextRange, TextSize};

use crate::lexer::{lex, Token, TokenKind};

/// A matched pair of braces, given as the offsets of the brace characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracePair {
    /// Offset of the opening `{`.
    pub open: TextSize,
    /// Offset of the closing `}`.
    pub close: TextSize,
}

impl BracePair {
    /// The range between the braces, exclusive of both.
    #[must_use]
    pub fn interior(&self) -> TextRange {
        TextRange::new(self.open + TextSize::from(1), self.close)
    }

    /// The range covering the pair, braces included.
    #[must_use]
    pub fn range(&self) -> TextRange {
        TextRange::new(self.open, self.close + TextSize::from(1))
    }
}

/// Finds the innermost brace pair enclosing `offset`.
///
/// Convenience wrapper that lexes `source` first; callers that already hold
/// the token stream should use [`enclosing_pair`].
#[must_use]
pub fn match_enclosing(source: &str, offset: TextSize) -> Option<BracePair> {
    enclosing_pair(&lex(source), offset)
}

/// Finds the innermost brace pair enclosing `offset` in a token stream.
///
/// A cursor sitting on a brace character belongs to that brace's own pair.
/// Returns `None` when the offset is at top-level scope, or when the
/// enclosing open brace is never closed.
#[must_use]
pub fn enclosing_pair(tokens: &[Token], offset: TextSize) -> Option<BracePair> {
    let idx = tokens.partition_point(|t| t.range.end() <= offset);

    // Sitting on `{`: this brace opens the enclosing pair. Sitting on `}`
    // needs no special case; the backward scan below finds its partner.
    if idx < tokens.len() && tokens[idx].kind == TokenKind::LBrace {
        return pair_at(tokens, idx);
    }

    let mut depth = 0usize;
    for j in (0..idx).rev() {
        match tokens[j].kind {
            TokenKind::RBrace => depth += 1,
            TokenKind::LBrace => {
                if depth == 0 {
                    return pair_at(tokens, j);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Builds the pair for the open brace at `open_idx` by scanning forward for
/// its partner.
fn pair_at(tokens: &[Token], open_idx: usize) -> Option<BracePair> {
    let mut depth = 0usize;
    for j in open_idx + 1..tokens.len() {
        match tokens[j].kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                if depth == 0 {
                    return Some(BracePair {
                        open: tokens[open_idx].range.start(),
                        close: tokens[j].range.start(),
                    });
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}
