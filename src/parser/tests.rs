#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;
use crate::lexer::tokenize;

fn parse_ok(input: &str) -> Scope {
    parse_str(input).expect("Failed to parse document")
}

fn syntax_error(input: &str) -> XxmlError {
    match parse_str(input) {
        Err(e @ XxmlError::SyntaxError { .. }) => e,
        other => panic!("Expected SyntaxError for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_parser_engine_settings_document() {
    let input = r#"
// Engine settings
<GameID = "0x00003E91A376E7AB">

[<Invasion_Default>
    <Version = "0.1.2">
    WindowProperties = {
        Title = "Invasion"
        Dimensions = [750, 450]
        Fullscreen = false
    }
]
"#;

    let root = parse_ok(input);

    assert!(root.exists("GameID"));
    assert!(root.exists("Invasion_Default"));
    assert!(root.exists("Invasion_Default.Version"));
    assert!(root.exists("Invasion_Default.WindowProperties.Title"));
    assert!(root.exists("Invasion_Default.WindowProperties.Dimensions"));

    let title: String = root.get("Invasion_Default.WindowProperties.Title").unwrap();
    assert_eq!(title, "Invasion");

    let dims: Vec<Value> = root.get("Invasion_Default.WindowProperties.Dimensions").unwrap();
    assert_eq!(dims, vec![Value::Number(750.0), Value::Number(450.0)]);
}

#[test]
fn test_parse_from_token_sequence() {
    let tokens = tokenize("<A = 1>").unwrap();
    let root = parse(tokens).unwrap();
    assert_eq!(root.get::<f64>("A").unwrap(), 1.0);
}

#[test]
fn test_parse_tokens_without_end_marker() {
    let mut tokens = tokenize("<A = true>").unwrap();
    tokens.pop();
    let root = parse(tokens).unwrap();
    assert!(root.get::<bool>("A").unwrap());
}

#[test]
fn test_empty_document() {
    let root = parse_ok("  // nothing here\n");
    assert!(root.is_empty());
    assert!(parse(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_tag_scalars() {
    let root = parse_ok(r#"<S = "text"> <N = -2.5> <B = true> <L = 116114117101>"#);
    assert_eq!(root.get::<String>("S").unwrap(), "text");
    assert_eq!(root.get::<f64>("N").unwrap(), -2.5);
    assert!(root.get::<bool>("B").unwrap());
    assert!(root.get::<bool>("L").unwrap());
}

#[test]
fn test_integer_literal_is_float() {
    let root = parse_ok("<A=1>");
    assert_eq!(root.get::<f64>("A").unwrap(), 1.0);
    assert_eq!(root.variable("A").unwrap().value(), &Value::Number(1.0));
}

#[test]
fn test_assignment_array_in_source_order() {
    let root = parse_ok("D = [1, 2, 3]");
    let items: Vec<Value> = root.get("D").unwrap();
    assert_eq!(
        items,
        vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
    );
}

#[test]
fn test_heterogeneous_and_nested_arrays() {
    let root = parse_ok(r#"Mixed = ["a", 1, false, [2, []]] Empty = []"#);
    let mixed: Vec<Value> = root.get("Mixed").unwrap();
    assert_eq!(
        mixed,
        vec![
            Value::String("a".into()),
            Value::Number(1.0),
            Value::Bool(false),
            Value::Array(vec![Value::Number(2.0), Value::Array(vec![])]),
        ]
    );
    assert!(root.get::<Vec<Value>>("Empty").unwrap().is_empty());
}

#[test]
fn test_namespace_registers_child_scope() {
    let root = parse_ok("[<NS> <K = 5> ]");
    assert!(root.namespace("NS").is_some());
    assert!(root.variable("NS").is_none());
    assert!(root.exists("NS.K"));

    let ns: Scope = root.get("NS").unwrap();
    assert_eq!(ns.get::<f64>("K").unwrap(), 5.0);
}

#[test]
fn test_object_is_stored_as_variable() {
    let root = parse_ok("K = { A = 1 }");
    assert!(root.namespace("K").is_none());
    assert!(matches!(root.variable("K").unwrap().value(), Value::Scope(_)));
    assert!(root.exists("K.A"));
}

#[test]
fn test_nested_namespaces_and_objects() {
    let input = r#"
[<Outer>
    [<Inner>
        Deep = { Deeper = { Leaf = "x" } }
    ]
    Plain = 3
]
"#;
    let root = parse_ok(input);
    assert_eq!(root.get::<String>("Outer.Inner.Deep.Deeper.Leaf").unwrap(), "x");
    assert_eq!(root.get::<f64>("Outer.Plain").unwrap(), 3.0);
}

#[test]
fn test_later_declarations_overwrite() {
    let root = parse_ok("<A = 1> A = 2 [<N> <X = 1>] [<N> <Y = 2>]");
    assert_eq!(root.get::<f64>("A").unwrap(), 2.0);
    assert!(!root.exists("N.X"));
    assert!(root.exists("N.Y"));
}

#[test]
fn test_brackets_in_value_position_are_arrays() {
    // `[<` after `=` is not a namespace; `<` is not a value.
    let err = syntax_error("A = [<B> ]");
    assert!(matches!(err, XxmlError::SyntaxError { code: Some(210), .. }));
}

#[test]
fn test_missing_tag_value_fails() {
    let err = syntax_error("<A=>");
    match err {
        XxmlError::SyntaxError { message, line, column, .. } => {
            assert_eq!(message, "Expected value");
            assert_eq!((line, column), (1, 4));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_bracket_without_tag_at_statement_position_fails() {
    let err = syntax_error("[1, 2]");
    assert!(err.to_string().contains("Expected '<' after '['"));
}

#[test]
fn test_stray_token_at_statement_position_fails() {
    syntax_error("<A = 1> = <B = 2>");
    syntax_error("\"loose string\"");
}

#[test]
fn test_unclosed_namespace_fails() {
    let err = syntax_error("[<NS> <K = 1>");
    assert!(err.to_string().contains("Expected ']'"));
}

#[test]
fn test_unclosed_object_fails() {
    syntax_error("K = { A = 1");
}

#[test]
fn test_object_rejects_tags() {
    syntax_error("K = { <A = 1> }");
}

#[test]
fn test_array_requires_commas() {
    syntax_error("D = [1 2]");
    syntax_error("D = [1, ]");
}

#[test]
fn test_lone_minus_is_invalid_number() {
    let err = syntax_error("<A = ->");
    assert!(matches!(err, XxmlError::SyntaxError { code: Some(206), .. }));
}

#[test]
fn test_failure_after_valid_statements_returns_no_tree() {
    assert!(parse_str("<A = 1> <B = 2> <C =>").is_err());
}

#[test]
fn test_strict_source_reports_lex_errors() {
    let result = Parser::from_source("<A = 1> $", LexMode::Strict);
    assert!(matches!(result, Err(XxmlError::UnexpectedCharacter { character: '$', .. })));

    let lenient = Parser::from_source("<A = 1> $", LexMode::Lenient).unwrap().parse().unwrap();
    assert!(lenient.exists("A"));
}

#[test]
fn test_nesting_within_limit_parses() {
    let depth = MAX_NESTING_DEPTH;
    let input = format!("A = {}{}", "[".repeat(depth), "]".repeat(depth));
    let root = parse_ok(&input);
    assert!(root.exists("A"));

    let namespaces = format!("{}{}", "[<N>".repeat(depth / 2), "]".repeat(depth / 2));
    assert!(parse_str(&namespaces).unwrap().exists("N.N.N"));
}

#[test]
fn test_deep_arrays_fail_instead_of_overflowing() {
    let depth = 200_000;
    let input = format!("A = {}{}", "[".repeat(depth), "]".repeat(depth));
    let err = syntax_error(&input);
    assert!(matches!(err, XxmlError::SyntaxError { code: Some(207), .. }));
}

#[test]
fn test_deep_objects_and_namespaces_fail() {
    let objects = format!("A = {}{}", "{ B = ".repeat(1_000), "}".repeat(1_000));
    assert!(matches!(syntax_error(&objects), XxmlError::SyntaxError { code: Some(207), .. }));

    let namespaces = format!("{}{}", "[<N>".repeat(1_000), "]".repeat(1_000));
    assert!(matches!(syntax_error(&namespaces), XxmlError::SyntaxError { code: Some(207), .. }));
}
