//! Primitive parser tests.

use brdgme_command::{Enum, EnumValue, Int, ParseError, Parser, Value};

fn names() -> Vec<String> {
    vec!["Mick".into(), "Steve".into(), "Stephanie".into()]
}

#[test]
fn int_negative_and_bounds() {
    let parser: Parser = Parser::Int(Int::bounded(-5, 5));
    assert_eq!(parser.parse("-3", &[]).unwrap().value, Value::Int(-3));

    let err = parser.parse("-6", &[]).unwrap_err();
    assert_eq!(err.to_string(), "-6 is too low, expected number between -5 and 5");
}

#[test]
fn int_rejects_sign_without_digits() {
    let parser: Parser = Parser::int();
    assert_eq!(
        parser.parse("- 3", &[]).unwrap_err(),
        ParseError::expecting(vec!["number".into()])
    );
}

#[test]
fn int_overflow_is_reported() {
    let parser: Parser = Parser::int();
    let err = parser.parse("99999999999999999999", &[]).unwrap_err();
    assert_eq!(
        err.message.as_deref(),
        Some("99999999999999999999 is out of range")
    );
}

#[test]
fn int_positive_and_not_negative() {
    let positive: Parser = Parser::Int(Int::positive());
    assert!(positive.parse("0", &[]).is_err());
    assert_eq!(positive.expected(&[]), vec!["number 1 or higher"]);

    let not_negative: Parser = Parser::Int(Int::not_negative());
    assert_eq!(not_negative.parse("0", &[]).unwrap().value, Value::Int(0));
}

#[test]
fn token_is_case_insensitive() {
    let parser: Parser = Parser::token("play");
    let output = parser.parse("PlAy extra", &[]).unwrap();
    assert_eq!(output.value, Value::from("play"));
    assert_eq!(output.consumed, "PlAy");
    assert_eq!(output.remaining, " extra");
}

#[test]
fn token_partial_input_fails() {
    let parser: Parser = Parser::token("play");
    assert_eq!(
        parser.parse("pl", &[]).unwrap_err(),
        ParseError::expecting(vec!["play".into()])
    );
}

#[test]
fn token_handles_non_ascii() {
    let parser: Parser = Parser::token("ÉPÉE");
    let output = parser.parse("épée!", &[]).unwrap();
    assert_eq!(output.consumed, "épée");
    assert_eq!(output.remaining, "!");
    assert!(parser.parse("é", &[]).is_err());
}

#[test]
fn space_consumes_all_leading_whitespace() {
    let parser: Parser = Parser::space();
    let output = parser.parse(" \t\n x", &[]).unwrap();
    assert_eq!(output.value, Value::from(" \t\n "));
    assert_eq!(output.remaining, "x");
}

#[test]
fn enum_custom_values() {
    let parser: Parser = Parser::enumeration(vec![
        EnumValue::new("red", Value::Int(0)),
        EnumValue::new("green", Value::Int(1)),
        EnumValue::new("grey", Value::Int(2)),
    ]);
    assert_eq!(parser.parse("gree", &[]).unwrap().value, Value::Int(1));
    let err = parser.parse("gr", &[]).unwrap_err();
    assert_eq!(
        err.message.as_deref(),
        Some("matched green and grey, more input is required to uniquely match one")
    );
}

#[test]
fn enum_exact_constructor() {
    let parser: Parser = Parser::Enum(Enum::exact(vec![
        EnumValue::new("north", Value::Int(0)),
        EnumValue::new("south", Value::Int(1)),
    ]));
    assert!(parser.parse("nor", &[]).is_err());
    assert_eq!(parser.parse("SOUTH", &[]).unwrap().value, Value::Int(1));
}

#[test]
fn player_full_name_beats_longer_name() {
    let parser: Parser = Parser::player();
    let output = parser.parse("steve", &names()).unwrap();
    assert_eq!(output.value, Value::Player(1));

    let output = parser.parse("stepha", &names()).unwrap();
    assert_eq!(output.value, Value::Player(2));
}

#[test]
fn player_ambiguous_prefix() {
    let parser: Parser = Parser::player();
    let err = parser.parse("ste", &names()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "matched Steve and Stephanie, more input is required to uniquely match one, \
         expected Mick, Steve or Stephanie"
    );
}
