//! Whole-command scenarios.

use brdgme_command::trace::{HumanFormatter, TraceEvent, TraceFormatter};
use brdgme_command::{Enum, Int, ParseError, Parser, ParserKind, Tracer, TracerConfig, Value};

fn castles() -> Vec<&'static str> {
    vec!["Azuchi", "Himeji", "Matsumoto", "Nagoya", "Osaka"]
}

fn attack() -> Parser {
    Parser::chain(vec![
        Parser::token("attack"),
        Parser::after_space(Parser::Enum(Enum::from_strings(castles(), false))),
    ])
}

fn bid() -> Parser {
    Parser::chain(vec![
        Parser::token("bid"),
        Parser::after_space(Parser::Int(Int::bounded(0, 15))),
    ])
}

#[test]
fn attack_abbreviated_castle() {
    let output = attack().parse("attack azu", &[]).unwrap();
    assert_eq!(
        output.value,
        Value::List(vec![Value::from("attack"), Value::from("Azuchi")])
    );
    assert_eq!(output.remaining, "");
}

#[test]
fn attack_unknown_castle() {
    let err = attack().parse("attack edo", &[]).unwrap_err();
    assert_eq!(err.offset, 7);
    assert_eq!(
        err.to_string(),
        "expected Azuchi, Himeji, Matsumoto, Nagoya or Osaka"
    );
}

#[test]
fn bid_in_range() {
    let output = bid().parse("bid 10", &[]).unwrap();
    assert_eq!(output.value.get(1), Some(&Value::Int(10)));
    assert_eq!(output.remaining, "");
}

#[test]
fn bid_missing_amount() {
    let err = bid().parse("bid", &[]).unwrap_err();
    assert_eq!(err.offset, 3);
    assert_eq!(err.message.as_deref(), Some("expected whitespace"));
}

#[test]
fn truncated_token() {
    let parser: Parser = Parser::token("play");
    assert_eq!(
        parser.parse("pl", &[]).unwrap_err(),
        ParseError::expecting(vec!["play".into()])
    );
}

#[test]
fn traced_parse_matches_untraced() {
    let grammar: Parser = Parser::one_of(vec![attack(), bid(), Parser::token("pass")]);
    for input in ["attack azu", "bid 20", "pass", "attack", "", "héllo"] {
        let mut tracer = Tracer::new(TracerConfig::new().enabled());
        let traced = grammar.parse_traced(input, &[], &mut tracer);
        assert_eq!(traced, grammar.parse(input, &[]), "input {input:?}");
        assert!(!tracer.buffer().is_empty());
    }
}

#[test]
fn trace_explains_rejection() {
    let grammar: Parser = Parser::one_of(vec![attack(), bid()]);
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    grammar.parse_traced("bid 20", &[], &mut tracer).unwrap_err();

    let int_failure = tracer
        .buffer()
        .failures()
        .into_iter()
        .find(|r| r.event.kind() == ParserKind::Int)
        .unwrap();
    assert_eq!(
        int_failure.event,
        TraceEvent::Failed {
            kind: ParserKind::Int,
            at: 4,
            offset: 0,
            message: Some("20 is too high".into()),
            expected: vec!["number between 0 and 15".into()],
        }
    );

    let root = tracer.buffer().last().unwrap();
    assert_eq!(root.depth, 0);
    assert_eq!(
        HumanFormatter::new().format(root),
        "- OneOf @0+4 20 is too high (expected number between 0 and 15)"
    );
}
