//! Lexical context classification.
//!
//! Every byte of a document belongs to exactly one context: plain code, a
//! string literal, a line or block comment, or a regex literal. Brace
//! matching only counts braces in code context, which is what keeps a stray
//! `{` inside `"..."` or `/* ... */` from corrupting the match.
//!
//! The classification is derived from the token stream: literal and comment
//! tokens map to their context, everything else (including whitespace and
//! unrecognized characters) is code.

use text_size::{TextRange, TextSize};

use crate::lexer::{lex, Token, TokenKind};

/// The lexical context of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextLabel {
    /// Plain code, including whitespace.
    Code,
    /// Inside a string or template literal, delimiters included.
    String,
    /// Inside a `//` comment.
    LineComment,
    /// Inside a `/* */` comment.
    BlockComment,
    /// Inside a regex literal, delimiters included.
    Regex,
}

impl ContextLabel {
    /// Returns `true` for the `Code` label.
    #[must_use]
    pub fn is_code(self) -> bool {
        self == Self::Code
    }
}

/// A contiguous run of offsets sharing one context label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSpan {
    /// The byte range of the span.
    pub range: TextRange,
    /// The label shared by every offset in the span.
    pub label: ContextLabel,
}

/// The full context classification of a document.
///
/// Spans partition the document: they are contiguous, non-empty, and
/// adjacent spans always carry different labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMap {
    spans: Vec<ContextSpan>,
}

/// Classifies every offset of `source`.
///
/// Classification always completes; malformed or unterminated input degrades
/// to non-code context through the end of the text rather than failing.
#[must_use]
pub fn classify(source: &str) -> ContextMap {
    ContextMap::from_tokens(&lex(source))
}

impl ContextMap {
    fn from_tokens(tokens: &[Token]) -> Self {
        let mut spans: Vec<ContextSpan> = Vec::new();
        for token in tokens {
            let label = label_for(token.kind);
            match spans.last_mut() {
                Some(last) if last.label == label => {
                    last.range = TextRange::new(last.range.start(), token.range.end());
                }
                _ => spans.push(ContextSpan {
                    range: token.range,
                    label,
                }),
            }
        }
        Self { spans }
    }

    /// Returns the classified spans in document order.
    #[must_use]
    pub fn spans(&self) -> &[ContextSpan] {
        &self.spans
    }

    /// Returns the label at a byte offset. Offsets past the end of the
    /// document are code.
    #[must_use]
    pub fn label_at(&self, offset: TextSize) -> ContextLabel {
        let idx = self.spans.partition_point(|s| s.range.end() <= offset);
        match self.spans.get(idx) {
            Some(span) if span.range.start() <= offset => span.label,
            _ => ContextLabel::Code,
        }
    }
}

fn label_for(kind: TokenKind) -> ContextLabel {
    match kind {
        TokenKind::StringLiteral | TokenKind::TemplateLiteral => ContextLabel::String,
        TokenKind::LineComment => ContextLabel::LineComment,
        TokenKind::BlockComment => ContextLabel::BlockComment,
        TokenKind::RegexLiteral => ContextLabel::Regex,
        _ => ContextLabel::Code,
    }
}
