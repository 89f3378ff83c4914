use super::*;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Scope, XxmlError> {
    let mut root = Scope::new();

    while !parser.is_at_end() {
        parse_statement(parser, &mut root)?;
    }

    Ok(root)
}

/// `[` only opens a namespace here; in value position it is always an array.
///
/// Any other token is rejected. Older loaders silently skipped stray tokens at
/// this position, so documents relying on that now fail with code 205.
pub(super) fn parse_statement(parser: &mut Parser, scope: &mut Scope) -> Result<(), XxmlError> {
    match parser.peek_kind() {
        TokenKind::TagOpen => parse_tag(parser, scope),
        TokenKind::BracketOpen => parse_namespace(parser, scope),
        TokenKind::Identifier => value::parse_assignment(parser, scope),
        _ => Err(parser.error_at_current("Expected a tag, namespace or assignment", 205)),
    }
}

fn parse_tag(parser: &mut Parser, scope: &mut Scope) -> Result<(), XxmlError> {
    parser.consume(TokenKind::TagOpen, "Expected '<'")?;
    let name = parser.consume(TokenKind::Identifier, "Expected tag name")?;
    parser.consume(TokenKind::Assign, "Expected '=' after tag name")?;
    let value = value::parse_value(parser)?;
    parser.consume(TokenKind::TagClose, "Expected '>'")?;

    scope.set_variable(name.text, value);
    Ok(())
}

fn parse_namespace(parser: &mut Parser, parent: &mut Scope) -> Result<(), XxmlError> {
    parser.consume(TokenKind::BracketOpen, "Expected '['")?;
    parser.consume(TokenKind::TagOpen, "Expected '<' after '['")?;
    let name = parser.consume(TokenKind::Identifier, "Expected namespace name")?;
    parser.consume(TokenKind::TagClose, "Expected '>' after namespace name")?;

    parser.enter_nested()?;
    let mut namespace = Scope::new();
    while !parser.peek().is(TokenKind::BracketClose) && !parser.is_at_end() {
        parse_statement(parser, &mut namespace)?;
    }
    parser.consume(TokenKind::BracketClose, "Expected ']'")?;
    parser.leave_nested();

    parent.insert_namespace(name.text, namespace);
    Ok(())
}
