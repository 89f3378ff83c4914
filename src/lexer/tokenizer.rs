use super::*;
use super::scanner::{bump, position};

/// Spellings that older settings files use in place of `false` / `true`.
const LEGACY_FALSE: &str = "10297108115101";
const LEGACY_TRUE: &str = "116114117101";

/// Scan one token starting at `c`. Returns `Ok(None)` when the character was
/// skipped without producing a token.
pub(super) fn next_token(lexer: &mut Lexer, c: char) -> Result<Option<Token>, XxmlError> {
    let token = match c {
        '<' => tokenize_symbol(lexer, TokenKind::TagOpen, "<"),
        '>' => tokenize_symbol(lexer, TokenKind::TagClose, ">"),
        '[' => tokenize_symbol(lexer, TokenKind::BracketOpen, "["),
        ']' => tokenize_symbol(lexer, TokenKind::BracketClose, "]"),
        '{' => tokenize_symbol(lexer, TokenKind::BraceOpen, "{"),
        '}' => tokenize_symbol(lexer, TokenKind::BraceClose, "}"),
        '=' => tokenize_symbol(lexer, TokenKind::Assign, "="),
        ',' => tokenize_symbol(lexer, TokenKind::Comma, ","),
        c if c.is_ascii_alphabetic() || c == '_' => tokenize_identifier(lexer),
        c if c.is_ascii_digit() || c == '-' || c == '.' => tokenize_number(lexer),
        '"' => tokenize_string(lexer)?,
        ch => return tokenize_unexpected_char(lexer, ch),
    };

    Ok(Some(token))
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind, text: &str) -> Token {
    let (line, column) = position(lexer);
    bump(lexer);
    Token::new(kind, text, line, column)
}

fn legacy_boolean(text: &str) -> Option<&'static str> {
    match text {
        LEGACY_FALSE => Some("false"),
        LEGACY_TRUE => Some("true"),
        _ => None,
    }
}

fn tokenize_identifier(lexer: &mut Lexer) -> Token {
    let (line, column) = position(lexer);
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    match ident.as_str() {
        "true" | "false" => Token::new(TokenKind::Boolean, ident, line, column),
        other => match legacy_boolean(other) {
            Some(value) => Token::new(TokenKind::Boolean, value, line, column),
            None => Token::new(TokenKind::Identifier, ident, line, column),
        },
    }
}

fn tokenize_number(lexer: &mut Lexer) -> Token {
    let (line, column) = position(lexer);
    let mut num = String::new();
    let mut has_decimal = false;

    if lexer.peek == Some('-') {
        num.push('-');
        bump(lexer);
    }

    while let Some(ch) = lexer.peek {
        if ch == '.' {
            if has_decimal {
                break;
            }
            has_decimal = true;
        } else if !ch.is_ascii_digit() {
            break;
        }
        num.push(ch);
        bump(lexer);
    }

    // The legacy spellings are all digits, so they arrive here rather than as identifiers.
    match legacy_boolean(&num) {
        Some(value) => Token::new(TokenKind::Boolean, value, line, column),
        None => Token::new(TokenKind::Number, num, line, column),
    }
}

fn tokenize_string(lexer: &mut Lexer) -> Result<Token, XxmlError> {
    let (line, column) = position(lexer);
    bump(lexer); // consume opening '"'
    let mut content = String::new();
    let mut closed = false;

    while let Some(ch) = lexer.peek {
        match ch {
            '"' => {
                bump(lexer);
                closed = true;
                break;
            }
            '\\' => {
                bump(lexer);
                // Escapes are not interpreted: the next character is taken as-is.
                if let Some(next_ch) = bump(lexer) {
                    content.push(next_ch);
                }
            }
            _ => {
                content.push(ch);
                bump(lexer);
            }
        }
    }

    if !closed && lexer.mode == LexMode::Strict {
        return Err(XxmlError::UnclosedString {
            line,
            column,
            hint: Some("Add the closing '\"'".into()),
            code: Some(103),
        });
    }

    Ok(Token::new(TokenKind::StringLiteral, content, line, column))
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char) -> Result<Option<Token>, XxmlError> {
    let (line, column) = position(lexer);
    bump(lexer);

    match lexer.mode {
        LexMode::Lenient => {
            tracing::trace!(character = ?ch, line, column, "skipping unrecognized character");
            Ok(None)
        }
        LexMode::Strict => Err(XxmlError::UnexpectedCharacter {
            character: ch,
            line,
            column,
            hint: Some("Unexpected character in input".into()),
            code: Some(104),
        }),
    }
}
