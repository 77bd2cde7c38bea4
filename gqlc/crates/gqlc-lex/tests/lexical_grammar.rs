//! End-to-end checks of the lexical grammar through the public API.

use gqlc_lex::{report_unrecognized, tokenize, StringLiteral, Token, TokenKind};
use gqlc_util::{position_of, Handler, LineCol, SourceFile, Span};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn zero_is_a_complete_integer_part() {
    assert_eq!(
        tokenize("01"),
        vec![
            Token::new(TokenKind::IntValue("0".into()), Span::new(0, 1)),
            Token::new(TokenKind::IntValue("1".into()), Span::new(1, 2)),
        ]
    );
}

#[test]
fn float_beats_int() {
    assert_eq!(
        tokenize("1.5"),
        vec![Token::new(TokenKind::FloatValue("1.5".into()), Span::new(0, 3))]
    );
}

#[test]
fn exponent_is_kept() {
    assert_eq!(kinds("1e10"), vec![TokenKind::FloatValue("1e10".into())]);
    assert_eq!(kinds("1.5e-3"), vec![TokenKind::FloatValue("1.5e-3".into())]);
}

#[test]
fn negative_integer() {
    assert_eq!(kinds("-42"), vec![TokenKind::IntValue("-42".into())]);
}

#[test]
fn block_string_keeps_single_quotes() {
    assert_eq!(
        kinds(r#""""a "b" c""""#),
        vec![TokenKind::StringValue(StringLiteral::BlockQuote("a \"b\" c".into()))]
    );
}

#[test]
fn unterminated_block_string_falls_back_to_empty_string() {
    let source = "\"\"\"abc";
    assert_eq!(
        tokenize(source),
        vec![
            Token::new(
                TokenKind::StringValue(StringLiteral::SingleQuote(String::new())),
                Span::new(0, 2)
            ),
            Token::new(TokenKind::UnrecognizedInput("\"abc".into()), Span::new(2, 6)),
        ]
    );

    let file = SourceFile::new("desc.graphql", source);
    let handler = Handler::new();
    assert_eq!(report_unrecognized(&tokenize(source), &file, &handler), 1);
    let diag = &handler.diagnostics()[0];
    assert_eq!(diag.code.map(|c| c.to_string()), Some("E1003".to_string()));
    assert_eq!(diag.span, Span::new(0, 6));
}

#[test]
fn two_dots_are_not_an_ellipsis() {
    let tokens = kinds("..");
    assert!(!tokens.contains(&TokenKind::Ellipsis));
    assert_eq!(tokens, vec![TokenKind::UnrecognizedInput("..".into())]);
}

#[test]
fn comment_and_newline_produce_nothing() {
    assert_eq!(kinds("# comment\nfoo"), vec![TokenKind::Identifier("foo".into())]);
}

#[test]
fn unterminated_string_goes_to_the_tail() {
    let tokens = kinds("\"abc");
    assert!(!tokens.iter().any(|k| matches!(k, TokenKind::StringValue(_))));
    assert_eq!(tokens, vec![TokenKind::UnrecognizedInput("\"abc".into())]);
}

#[test]
fn unrecognized_token_maps_to_line_and_column() {
    let source = "query {\n  hero {\n    name ..\n  }\n}";
    let tokens = tokenize(source);
    let last = tokens.last().expect("tokens");

    assert!(matches!(last.kind, TokenKind::UnrecognizedInput(_)));
    assert_eq!(position_of(last.span.start, source), LineCol::new(3, 10));

    let file = SourceFile::new("hero.graphql", source);
    let handler = Handler::new();
    assert_eq!(report_unrecognized(&tokens, &file, &handler), 1);
    let rendered = handler.diagnostics()[0].render(&file);
    assert!(rendered.contains(" --> hero.graphql:3:10"));
}

#[test]
fn introspection_query_tokenizes_cleanly() {
    let source = r#"
        query IntrospectionQuery {
          __schema {
            queryType { name }
            types { ...FullType }
            directives { name description locations args { ...InputValue } }
          }
        }
        fragment FullType on __Type {
          kind name description
          fields(includeDeprecated: true) { name args { ...InputValue } isDeprecated }
        }
        fragment InputValue on __InputValue { name type { name } defaultValue }
    "#;
    let tokens = kinds(source);
    assert!(!tokens.iter().any(|k| matches!(k, TokenKind::UnrecognizedInput(_))));
    assert_eq!(tokens.iter().filter(|k| **k == TokenKind::Ellipsis).count(), 3);
    assert_eq!(tokens.first(), Some(&TokenKind::Identifier("query".into())));
    assert_eq!(tokens.last(), Some(&TokenKind::RBrace));
}

#[test]
fn schema_with_descriptions() {
    let source = "\"\"\"\nA character\n\"\"\"\ntype Character {\n  \"the name\" name: String!\n  height(unit: Unit = METER): Float\n}";
    let tokens = kinds(source);
    assert_eq!(
        tokens[0],
        TokenKind::StringValue(StringLiteral::BlockQuote("\nA character\n".into()))
    );
    assert!(tokens.contains(&TokenKind::StringValue(StringLiteral::SingleQuote("the name".into()))));
    assert!(!tokens.iter().any(|k| matches!(k, TokenKind::UnrecognizedInput(_))));
}
