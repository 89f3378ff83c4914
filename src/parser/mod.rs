// Author: Dustin Pilgrim
// License: MIT

use crate::lexer::{LexMode, Lexer, Token, TokenKind};
use crate::scope::Scope;
use crate::XxmlError;

mod document;
mod value;

/// How deeply namespaces, objects and arrays may nest before the parse is rejected.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser over a token sequence, with one token of lookahead.
///
/// Parsing is all-or-nothing: the first grammar violation aborts with
/// [`XxmlError::SyntaxError`] and no tree is returned.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfInput)) {
            let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column));
            tokens.push(Token::new(TokenKind::EndOfInput, "", line, column));
        }
        Self { tokens, current: 0, depth: 0 }
    }

    /// Lex `input` with the given mode and prepare a parser over the result.
    pub fn from_source(input: &str, mode: LexMode) -> Result<Self, XxmlError> {
        let tokens = Lexer::new(input).with_mode(mode).tokenize()?;
        Ok(Self::new(tokens))
    }

    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees a trailing end-of-input token to park on.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is(TokenKind::EndOfInput)
    }

    /// Take the current token if it is `expected`, otherwise fail with `message`.
    pub(crate) fn consume(&mut self, expected: TokenKind, message: &str) -> Result<Token, XxmlError> {
        if self.peek().is(expected) {
            return Ok(self.advance());
        }
        Err(self.error_at_current(message, 202))
    }

    /// Step into a namespace, object or array body.
    pub(crate) fn enter_nested(&mut self) -> Result<(), XxmlError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self
                .error_at_current("Nesting too deep", 207)
                .with_hint(format!("At most {} nested levels are allowed", MAX_NESTING_DEPTH)));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn error_at_current(&self, message: &str, code: u32) -> XxmlError {
        let token = self.peek();
        XxmlError::SyntaxError {
            message: message.to_string(),
            line: token.line,
            column: token.column,
            hint: Some(found_hint(token)),
            code: Some(code),
        }
    }

    /// Parse the whole token sequence into a root scope.
    pub fn parse(mut self) -> Result<Scope, XxmlError> {
        let root = document::parse_document(&mut self)?;
        tracing::debug!(
            variables = root.variables().count(),
            namespaces = root.namespaces().count(),
            "parsed settings document"
        );
        Ok(root)
    }
}

fn found_hint(token: &Token) -> String {
    match token.kind {
        TokenKind::Identifier | TokenKind::Number | TokenKind::Boolean => {
            format!("Found {} '{}'", token.kind, token.text)
        }
        TokenKind::StringLiteral => format!("Found string \"{}\"", token.text),
        kind => format!("Found {}", kind),
    }
}

/// Parse an already-lexed token sequence.
pub fn parse(tokens: Vec<Token>) -> Result<Scope, XxmlError> {
    Parser::new(tokens).parse()
}

/// Lex (leniently) and parse a whole document.
pub fn parse_str(input: &str) -> Result<Scope, XxmlError> {
    Parser::from_source(input, LexMode::Lenient)?.parse()
}

#[cfg(test)]
mod tests;
