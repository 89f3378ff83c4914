use super::*;
use crate::ast::Value;

pub(super) fn parse_assignment(parser: &mut Parser, scope: &mut Scope) -> Result<(), XxmlError> {
    let name = parser.consume(TokenKind::Identifier, "Expected identifier")?;
    parser.consume(TokenKind::Assign, "Expected '=' after identifier")?;

    let value = if parser.peek().is(TokenKind::BraceOpen) {
        parse_object(parser)?
    } else {
        parse_value(parser)?
    };

    scope.set_variable(name.text, value);
    Ok(())
}

/// `{ assignment* }`. Objects hold assignments only, never tags or namespaces.
fn parse_object(parser: &mut Parser) -> Result<Value, XxmlError> {
    parser.consume(TokenKind::BraceOpen, "Expected '{'")?;
    parser.enter_nested()?;

    let mut object = Scope::new();
    while !parser.peek().is(TokenKind::BraceClose) && !parser.is_at_end() {
        parse_assignment(parser, &mut object)?;
    }
    parser.consume(TokenKind::BraceClose, "Expected '}'")?;
    parser.leave_nested();

    Ok(Value::Scope(object))
}

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, XxmlError> {
    match parser.peek_kind() {
        TokenKind::StringLiteral => Ok(Value::String(parser.advance().text)),
        TokenKind::Number => parse_number_value(parser),
        TokenKind::Boolean => Ok(Value::Bool(parser.advance().text == "true")),
        TokenKind::BracketOpen => parse_array_value(parser),
        _ => Err(parser.error_at_current("Expected value", 210)),
    }
}

fn parse_number_value(parser: &mut Parser) -> Result<Value, XxmlError> {
    let token = parser.advance();

    // Rust's float parser is locale independent, which is what the format requires.
    token
        .text
        .parse::<f64>()
        .map(Value::Number)
        .map_err(|_| XxmlError::SyntaxError {
            message: format!("Invalid number '{}'", token.text),
            line: token.line,
            column: token.column,
            hint: Some("Numbers need at least one digit".into()),
            code: Some(206),
        })
}

fn parse_array_value(parser: &mut Parser) -> Result<Value, XxmlError> {
    parser.consume(TokenKind::BracketOpen, "Expected '['")?;
    parser.enter_nested()?;
    let mut elements = Vec::new();

    if !parser.peek().is(TokenKind::BracketClose) {
        loop {
            elements.push(parse_value(parser)?);

            if !parser.peek().is(TokenKind::Comma) {
                break;
            }
            parser.advance();
        }
    }

    parser.consume(TokenKind::BracketClose, "Expected ']'")?;
    parser.leave_nested();
    Ok(Value::Array(elements))
}
