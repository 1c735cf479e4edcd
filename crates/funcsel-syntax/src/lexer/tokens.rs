//! Token definitions for JavaScript source text.
//!
//! This module defines the lexical tokens the brace matcher and function
//! boundary locator operate on. The goal is not a conforming JavaScript
//! lexer: only the tokens that affect brace structure and function
//! recognition are distinguished, everything else is lumped into a generic
//! operator token. Literals that can hide braces (strings, comments,
//! template literals) are lexed as single tokens via callbacks so that their
//! contents never produce structural tokens.

use logos::Logos;

fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            lex.bump(i + 2);
            return true;
        }
        i += 1;
    }
    // Unterminated: the rest of the input stays inside the comment.
    lex.bump(bytes.len());
    true
}

fn lex_double_quoted(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_quoted(lex, b'"')
}

fn lex_single_quoted(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_quoted(lex, b'\'')
}

fn lex_template(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_quoted(lex, b'`')
}

fn lex_quoted(lex: &mut logos::Lexer<TokenKind>, quote: u8) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => {
                lex.bump(i + 1);
                return true;
            }
            _ => i += 1,
        }
    }
    // Unterminated: the rest of the input stays inside the literal.
    lex.bump(bytes.len());
    true
}

/// All token kinds recognized in JavaScript source text.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments)
/// - Literals (strings, templates, regexes, numbers)
/// - Punctuation
/// - Keywords (reserved words)
/// - Identifiers
/// - Special tokens (errors)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: /* ... */
    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// String literal, single or double quoted, with backslash escapes.
    #[token("\"", lex_double_quoted)]
    #[token("'", lex_single_quoted)]
    StringLiteral,

    /// Template literal: `...`. Interpolations are not entered; the whole
    /// literal, backtick to backtick, is one token.
    #[token("`", lex_template)]
    TemplateLiteral,

    /// Regex literal: /.../. Never matched by logos directly; the `Lexer`
    /// wrapper re-labels a slash in regex position and extends it over the
    /// literal body.
    RegexLiteral,

    /// Numeric literal. Loose on purpose: exponents split into several
    /// tokens, which does not matter for brace structure.
    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    NumberLiteral,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `:`
    #[token(":")]
    Colon,

    /// `.`
    #[token(".")]
    Dot,

    /// `=>`
    #[token("=>")]
    Arrow,

    /// `=` (plain assignment; compound assignments lex as `Operator`)
    #[token("=")]
    Eq,

    /// `/` in division position
    #[token("/")]
    Slash,

    /// `/=` in division position
    #[token("/=")]
    SlashEq,

    /// Any other run of operator characters. The individual operators are
    /// never distinguished; all that matters is that a regex may follow.
    #[regex(r"[+\-*%&|^~!<>?=]+", priority = 1)]
    Operator,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// `function`
    #[token("function")]
    KwFunction,

    /// `var`
    #[token("var")]
    KwVar,

    /// `let`
    #[token("let")]
    KwLet,

    /// `const`
    #[token("const")]
    KwConst,

    /// `this`
    #[token("this")]
    KwThis,

    /// `super`
    #[token("super")]
    KwSuper,

    /// `true`
    #[token("true")]
    KwTrue,

    /// `false`
    #[token("false")]
    KwFalse,

    /// `null`
    #[token("null")]
    KwNull,

    /// `if`
    #[token("if")]
    KwIf,

    /// `else`
    #[token("else")]
    KwElse,

    /// `for`
    #[token("for")]
    KwFor,

    /// `while`
    #[token("while")]
    KwWhile,

    /// `do`
    #[token("do")]
    KwDo,

    /// `switch`
    #[token("switch")]
    KwSwitch,

    /// `case`
    #[token("case")]
    KwCase,

    /// `default`
    #[token("default")]
    KwDefault,

    /// `return`
    #[token("return")]
    KwReturn,

    /// `typeof`
    #[token("typeof")]
    KwTypeof,

    /// `instanceof`
    #[token("instanceof")]
    KwInstanceof,

    /// `new`
    #[token("new")]
    KwNew,

    /// `delete`
    #[token("delete")]
    KwDelete,

    /// `void`
    #[token("void")]
    KwVoid,

    /// `throw`
    #[token("throw")]
    KwThrow,

    /// `yield`
    #[token("yield")]
    KwYield,

    /// `await`
    #[token("await")]
    KwAwait,

    /// `in`
    #[token("in")]
    KwIn,

    /// `break`
    #[token("break")]
    KwBreak,

    /// `continue`
    #[token("continue")]
    KwContinue,

    /// `class`
    #[token("class")]
    KwClass,

    /// `extends`
    #[token("extends")]
    KwExtends,

    /// `export`
    #[token("export")]
    KwExport,

    /// `import`
    #[token("import")]
    KwImport,

    /// `try`
    #[token("try")]
    KwTry,

    /// `catch`
    #[token("catch")]
    KwCatch,

    /// `finally`
    #[token("finally")]
    KwFinally,

    /// `with`
    #[token("with")]
    KwWith,

    /// `debugger`
    #[token("debugger")]
    KwDebugger,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier: letters, digits, `_`, `$`. Contextual keywords (`async`,
    /// `get`, `set`, `static`, `of`) lex as identifiers since they are legal
    /// names.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character
    #[default]
    Error,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or a comment).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this token is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwFunction
                | Self::KwVar
                | Self::KwLet
                | Self::KwConst
                | Self::KwThis
                | Self::KwSuper
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
                | Self::KwIf
                | Self::KwElse
                | Self::KwFor
                | Self::KwWhile
                | Self::KwDo
                | Self::KwSwitch
                | Self::KwCase
                | Self::KwDefault
                | Self::KwReturn
                | Self::KwTypeof
                | Self::KwInstanceof
                | Self::KwNew
                | Self::KwDelete
                | Self::KwVoid
                | Self::KwThrow
                | Self::KwYield
                | Self::KwAwait
                | Self::KwIn
                | Self::KwBreak
                | Self::KwContinue
                | Self::KwClass
                | Self::KwExtends
                | Self::KwExport
                | Self::KwImport
                | Self::KwTry
                | Self::KwCatch
                | Self::KwFinally
                | Self::KwWith
                | Self::KwDebugger
        )
    }

    /// Returns `true` if this token is a `var`/`let`/`const` declaration
    /// keyword.
    #[inline]
    pub fn is_declaration_keyword(self) -> bool {
        matches!(self, Self::KwVar | Self::KwLet | Self::KwConst)
    }

    /// Returns `true` if an expression can end at this token, i.e. a slash
    /// that follows it is a division operator rather than the start of a
    /// regex literal.
    ///
    /// A closing brace is deliberately absent: `}` usually ends a block, and
    /// a regex is allowed to follow a block.
    pub fn ends_expression(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::NumberLiteral
                | Self::StringLiteral
                | Self::TemplateLiteral
                | Self::RegexLiteral
                | Self::RParen
                | Self::RBracket
                | Self::KwThis
                | Self::KwSuper
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
        )
    }
}
