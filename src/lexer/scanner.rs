use super::*;

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// The character after the current one, without consuming anything
pub(super) fn peek_next(lexer: &Lexer) -> Option<char> {
    lexer.input.clone().next()
}

/// Position of the current (not yet consumed) character
pub(super) fn position(lexer: &Lexer) -> (usize, usize) {
    (lexer.line, lexer.column + 1)
}

fn is_space(c: char) -> bool {
    // matches C isspace, which also counts vertical tab
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Skip whitespace and `//` line comments
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            c if is_space(c) => {
                bump(lexer);
            }
            '/' if peek_next(lexer) == Some('/') => {
                // The newline itself is left for the whitespace arm.
                while let Some(ch) = lexer.peek {
                    if ch == '\n' {
                        break;
                    }
                    bump(lexer);
                }
            }
            _ => break,
        }
    }
}
