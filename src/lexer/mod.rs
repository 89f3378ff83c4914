// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::Chars;

use crate::XxmlError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // --- structure ---
    TagOpen,
    TagClose,
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
    Assign,
    Comma,

    // --- literals ---
    Identifier,
    StringLiteral,
    Number,
    Boolean,

    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::TagOpen => "'<'",
            TokenKind::TagClose => "'>'",
            TokenKind::BracketOpen => "'['",
            TokenKind::BracketClose => "']'",
            TokenKind::BraceOpen => "'{'",
            TokenKind::BraceClose => "'}'",
            TokenKind::Assign => "'='",
            TokenKind::Comma => "','",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A lexed token. `text` is the raw literal text: string contents with escapes
/// already applied, number digits as written, and `"true"`/`"false"` for booleans.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token { kind, text: text.into(), line, column }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// How the lexer treats input it cannot tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Skip unknown characters and let unterminated strings run to end of input.
    /// This is what existing settings files are written against.
    #[default]
    Lenient,
    /// Report unknown characters and unterminated strings as errors.
    Strict,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
            mode: LexMode::default(),
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn with_mode(mut self, mode: LexMode) -> Self {
        self.mode = mode;
        self
    }

    /// Consume the whole input. The returned sequence always ends with exactly one
    /// [`TokenKind::EndOfInput`] token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, XxmlError> {
        let mut tokens = Vec::new();

        loop {
            scanner::skip_whitespace_and_comments(&mut self);
            match self.peek {
                Some(c) => {
                    if let Some(token) = tokenizer::next_token(&mut self, c)? {
                        tokens.push(token);
                    }
                }
                None => break,
            }
        }

        tokens.push(Token::new(TokenKind::EndOfInput, "", self.line, self.column + 1));
        tracing::debug!(count = tokens.len(), mode = ?self.mode, "tokenized input");
        Ok(tokens)
    }
}

/// Tokenize `input` leniently. Lenient lexing never fails; the `Result` only
/// carries errors for [`LexMode::Strict`] lexers built through [`Lexer::with_mode`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, XxmlError> {
    Lexer::new(input).tokenize()
}
