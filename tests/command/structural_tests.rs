//! Structural combinator tests.

use brdgme_command::{Int, Many, Parser, Value};

#[test]
fn chain_consumption_is_concatenation() {
    let parser: Parser = Parser::chain(vec![
        Parser::token("give"),
        Parser::after_space(Parser::player()),
        Parser::after_space(Parser::int()),
    ]);
    let names = vec!["mick".to_string(), "steve".to_string()];
    let input = "give  STE 12 coins";
    let output = parser.parse(input, &names).unwrap();
    assert_eq!(output.consumed, "give  STE 12");
    assert_eq!(format!("{}{}", output.consumed, output.remaining), input);
    assert_eq!(
        output.value,
        Value::List(vec![Value::from("give"), Value::Player(1), Value::Int(12)])
    );
}

#[test]
fn one_of_deepest_failure_wins_across_nesting() {
    let parser: Parser = Parser::one_of(vec![
        Parser::chain(vec![
            Parser::token("play"),
            Parser::after_space(Parser::Int(Int::bounded(1, 5))),
        ]),
        Parser::chain(vec![
            Parser::token("play"),
            Parser::after_space(Parser::token("all")),
        ]),
        Parser::token("pass"),
    ]);
    let err = parser.parse("play 9", &[]).unwrap_err();
    assert_eq!(err.offset, 5);
    assert_eq!(
        err.to_string(),
        "9 is too high, expected number between 1 and 5 or all"
    );
}

#[test]
fn many_min_one_on_no_match_fails() {
    let parser: Parser = Many::some(Parser::token("x")).into();
    let err = parser.parse("y", &[]).unwrap_err();
    assert_eq!(
        err.message.as_deref(),
        Some("expected at least 1 items but could only parse 0")
    );
    assert_eq!(err.offset, 0);
}

#[test]
fn many_does_not_consume_dangling_delimiter() {
    let parser: Parser = Many::any(Parser::int())
        .with_delim(Parser::token(","))
        .into();
    let output = parser.parse("1,2,", &[]).unwrap();
    assert_eq!(output.consumed, "1,2");
    assert_eq!(output.remaining, ",");
}

#[test]
fn many_of_space_separated_cards() {
    let card: Parser = Parser::one_of(vec![
        Parser::token("ace"),
        Parser::token("king"),
        Parser::token("queen"),
    ]);
    let parser: Parser = Many::bounded(card, 1, 3).with_delim(Parser::space()).into();
    let output = parser.parse("King ace QUEEN king", &[]).unwrap();
    assert_eq!(
        output.value,
        Value::List(vec![Value::from("king"), Value::from("ace"), Value::from("queen")])
    );
    assert_eq!(output.remaining, " king");
}

#[test]
fn opt_never_fails() {
    let parser: Parser = Parser::chain(vec![
        Parser::token("roll"),
        Parser::opt(Parser::after_space(Parser::int())),
    ]);
    assert_eq!(
        parser.parse("roll", &[]).unwrap().value,
        Value::List(vec![Value::from("roll"), Value::None])
    );
    assert_eq!(
        parser.parse("roll 3", &[]).unwrap().value,
        Value::List(vec![Value::from("roll"), Value::Int(3)])
    );
}

#[test]
fn expected_descriptions_compose() {
    let parser: Parser = Parser::one_of(vec![
        Parser::opt(Parser::token("maybe")),
        Many::bounded(Parser::player(), 1, 2).into(),
        Parser::chain(vec![Parser::int(), Parser::token("never shown")]),
    ]);
    let names = vec!["mick".to_string()];
    assert_eq!(
        parser.expected(&names),
        vec!["optional maybe", "between 1 and 2 mick", "number"]
    );
}

#[test]
fn map_projects_into_custom_commands() {
    #[derive(Clone, Debug, PartialEq)]
    enum Command {
        Roll(Option<i64>),
    }

    let parser: Parser<Command> = Parser::map(
        Parser::chain(vec![
            Parser::token("roll"),
            Parser::opt(Parser::after_space(Parser::int())),
        ]),
        |value| Value::Custom(Command::Roll(value.take(1).as_int())),
    );
    assert_eq!(
        parser.parse("roll", &[]).unwrap().value,
        Value::Custom(Command::Roll(None))
    );
    assert_eq!(
        parser.parse("roll 2", &[]).unwrap().value.into_custom(),
        Some(Command::Roll(Some(2)))
    );
}

#[test]
fn grammars_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let bid: Parser = Parser::chain(vec![
        Parser::token("bid"),
        Parser::after_space(Parser::int()),
    ]);
    let parser = Parser::map(bid, |v| v.take(1));
    assert_send_sync(&parser);

    let handle = std::thread::spawn(move || parser.parse("bid 4", &[]).map(|o| o.value));
    assert_eq!(handle.join().unwrap(), Ok(Value::Int(4)));
}
