//! Property tests over arbitrary input.

use brdgme_command::{Enum, Int, Many, Parser, Spec, Tracer, TracerConfig, Value};
use proptest::prelude::*;

/// A grammar exercising every combinator.
fn kitchen_sink() -> Parser {
    Parser::one_of(vec![
        Parser::chain(vec![
            Parser::token("bid"),
            Parser::after_space(Parser::Int(Int::bounded(-10, 10))),
        ]),
        Parser::chain(vec![
            Parser::doc("give", Parser::token("give")),
            Parser::after_space(Parser::player()),
            Parser::opt(Parser::after_space(
                Many::bounded(Parser::Enum(Enum::from_strings(["ace", "king", "knave"], false)), 1, 3)
                    .with_delim(Parser::token(","))
                    .into(),
            )),
        ]),
        Parser::many(Parser::space()),
    ])
}

fn names() -> Vec<String> {
    vec!["ünïcode".into(), "beefsack".into(), "baconheist".into()]
}

/// Lower-case words so enum matching has something to resolve.
fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

proptest! {
    #[test]
    fn never_panics_and_splits_input(input in any::<String>()) {
        let names = names();
        match kitchen_sink().parse(&input, &names) {
            Ok(output) => {
                prop_assert_eq!(format!("{}{}", output.consumed, output.remaining), input.clone());
            }
            Err(err) => prop_assert!(err.offset <= input.len()),
        }
    }

    #[test]
    fn int_round_trip(min in -1000i64..1000, span in 0i64..1000, pick in 0i64..1000) {
        let max = min + span;
        let n = min + pick % (span + 1);
        let parser: Parser = Parser::Int(Int::bounded(min, max));
        let text = n.to_string();
        let output = parser.parse(&text, &[]).unwrap();
        prop_assert_eq!(output.value, Value::Int(n));
        prop_assert_eq!(output.remaining, "");
    }

    #[test]
    fn int_out_of_bounds_always_fails(min in -1000i64..1000, span in 0i64..1000, over in 1i64..1000) {
        let parser: Parser = Parser::Int(Int::bounded(min, min + span));
        prop_assert!(parser.parse(&(min + span + over).to_string(), &[]).is_err());
        prop_assert!(parser.parse(&(min - over).to_string(), &[]).is_err());
    }

    #[test]
    fn token_ignores_case(token in word(), upper in prop::collection::vec(any::<bool>(), 8)) {
        let typed: String = token
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let parser: Parser = Parser::token(token.clone());
        let output = parser.parse(&typed, &[]).unwrap();
        prop_assert_eq!(output.value, Value::Text(token));
        prop_assert_eq!(output.consumed, typed.as_str());
    }

    #[test]
    fn enum_success_is_unique_prefix(words in prop::collection::vec(word(), 1..6), input in word()) {
        let parser: Parser = Parser::Enum(Enum::from_strings(words.clone(), false));
        if let Ok(output) = parser.parse(&input, &[]) {
            let Value::Text(chosen) = output.value else {
                return Err(TestCaseError::fail("enum produced non-text"));
            };
            prop_assert!(words.contains(&chosen));
            prop_assert!(chosen.starts_with(output.consumed));
            prop_assert!(!output.consumed.is_empty());
        }
    }

    #[test]
    fn exact_enum_only_accepts_whole_names(words in prop::collection::vec(word(), 1..6), input in word()) {
        let parser: Parser = Parser::Enum(Enum::from_strings(words.clone(), true));
        if let Ok(output) = parser.parse(&input, &[]) {
            prop_assert!(words.iter().any(|w| w == output.consumed));
        }
    }

    #[test]
    fn opt_always_succeeds(input in any::<String>()) {
        let parser: Parser = Parser::opt(kitchen_sink());
        prop_assert!(parser.parse(&input, &names()).is_ok());
    }

    #[test]
    fn many_respects_max(count in 0usize..20, max in 0usize..10) {
        let input = vec!["x"; count].join(" ");
        let parser: Parser = Many::bounded(Parser::token("x"), 0, max)
            .with_delim(Parser::space())
            .into();
        let output = parser.parse(&input, &[]).unwrap();
        let parsed = output.value.as_list().map_or(0, <[Value]>::len);
        prop_assert_eq!(parsed, count.min(max));
    }

    #[test]
    fn tracing_never_changes_the_result(input in any::<String>(), depth in 0usize..6) {
        let names = names();
        let grammar = kitchen_sink();
        let mut tracer = Tracer::new(TracerConfig::new().enabled().with_max_depth(depth).with_buffer_size(64));
        prop_assert_eq!(
            grammar.parse_traced(&input, &names, &mut tracer),
            grammar.parse(&input, &names)
        );
        prop_assert!(tracer.buffer().len() <= 64);
        prop_assert!(tracer.buffer().iter().all(|r| r.depth <= depth));
    }

    #[test]
    fn spec_json_round_trips(words in prop::collection::vec(word(), 0..4), min in proptest::option::of(0usize..3)) {
        let parser: Parser = Parser::chain(vec![
            Parser::Enum(Enum::from_strings(words, true)),
            Many { min, ..Many::any(Parser::player()) }.into(),
        ]);
        let spec = parser.to_spec();
        prop_assert_eq!(Spec::from_json(&spec.to_json().unwrap()).unwrap(), spec);
    }
}
