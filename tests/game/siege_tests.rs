//! Siege game driven through the `Gamer` boundary.

use brdgme::command::{Spec, render_usage};
use brdgme::game::{GameError, Gamer, Log, Status, command_line, game_rng};

use crate::siege::{CASTLES, Phase, Siege};

fn names() -> Vec<String> {
    vec!["mick".into(), "steve".into()]
}

fn new_game(seed: u64) -> Siege {
    Siege::new(2, &mut game_rng(seed)).unwrap().0
}

/// A two player game past bidding, with player 0 to move.
fn sieging(seed: u64) -> Siege {
    let mut game = new_game(seed);
    game.command(0, "bid 9", &names()).unwrap();
    game.command(1, "bid 3", &names()).unwrap();
    game
}

#[test]
fn rejects_unsupported_player_counts() {
    for players in [0, 1, 5] {
        let err = Siege::new(players, &mut game_rng(0)).err().unwrap();
        assert_eq!(
            err,
            GameError::PlayerCount {
                min: 2,
                max: 4,
                given: players,
            }
        );
    }
    let (_, logs) = Siege::new(4, &mut game_rng(0)).unwrap();
    assert_eq!(logs, vec![Log::public("the siege begins")]);
}

#[test]
fn bidding_decides_first_player() {
    let mut game = new_game(1);
    let response = game.command(0, "bid 10", &names()).unwrap();
    assert_eq!(response.logs, vec![Log::private("you bid 10", vec![0])]);
    assert!(response.can_undo);

    assert_eq!(
        game.command(0, "bid 11", &names()).unwrap_err(),
        GameError::NotYourTurn
    );
    assert_eq!(
        game.command(1, "bid 10", &names()).unwrap_err(),
        GameError::invalid_input("someone already bid 10")
    );

    let response = game.command(1, "BID 12", &names()).unwrap();
    assert!(response.logs.contains(&Log::public("player 1 moves first")));
    assert_eq!(game.phase, Phase::Siege);
    assert_eq!(game.whose_turn(), vec![1]);
}

#[test]
fn bid_out_of_range_is_a_parse_error() {
    let mut game = new_game(1);
    let err = game.command(0, "bid 20", &names()).unwrap_err();
    assert!(matches!(err, GameError::Parse(_)));
    assert_eq!(err.to_string(), "20 is too high, expected number between 0 and 15");
}

#[test]
fn attack_abbreviated_castle() {
    let mut game = sieging(3);
    let response = game.command(0, "attack azu", &names()).unwrap();
    assert_eq!(response.remaining_input, "");
    assert!(!response.can_undo);
    assert_eq!(response.logs.len(), 1);
    assert!(response.logs[0].content.contains("Azuchi"));
    assert_eq!(game.whose_turn(), vec![1]);
}

#[test]
fn unknown_castle_is_rejected() {
    let mut game = sieging(3);
    let err = game.command(0, "attack edo", &names()).unwrap_err();
    let parse = match err {
        GameError::Parse(parse) => parse,
        other => panic!("expected a parse error, got {other:?}"),
    };
    assert_eq!(parse.offset, 7);
    assert_eq!(parse.expected.len(), CASTLES.len());
}

#[test]
fn fallen_castles_leave_the_grammar() {
    let mut game = sieging(3);
    game.owners[0] = Some(1);
    game.owners[3] = Some(0);

    let spec = game.command_spec(0).unwrap();
    let json = spec.to_json().unwrap();
    assert!(!json.contains("Azuchi"));
    assert!(!json.contains("Nagoya"));
    assert!(json.contains("Himeji"));
    assert!(game.command(0, "attack azuchi", &names()).is_err());
    assert!(game.command_spec(1).is_none());
}

#[test]
fn same_seed_same_siege() {
    let play = |seed| {
        let mut game = sieging(seed);
        let mut logs = Vec::new();
        for turn in 0..6 {
            let target = ["himeji", "matsu", "osaka"][turn % 3];
            let player = game.current;
            if let Ok(response) = game.command(player, &format!("attack {target}"), &names()) {
                logs.extend(response.logs);
            }
        }
        logs
    };
    assert_eq!(play(42), play(42));
}

#[test]
fn command_line_stops_when_turn_passes() {
    let mut game = sieging(5);
    let response = command_line(&mut game, 0, "  pass pass", &names()).unwrap();
    assert_eq!(response.remaining_input, "pass");
    assert_eq!(game.whose_turn(), vec![1]);
}

#[test]
fn finished_game_reports_placings() {
    let mut game = sieging(5);
    game.owners = vec![Some(1), Some(1), Some(0), Some(1), Some(0)];

    assert_eq!(
        game.status(),
        Status::Finished {
            placings: vec![2, 1]
        }
    );
    assert_eq!(game.placings(), vec![2, 1]);
    assert_eq!(
        game.command(0, "pass", &names()).unwrap_err(),
        GameError::Finished
    );
    assert!(game.command_spec(0).is_none());
}

#[test]
fn bidding_usage() {
    let game = new_game(0);
    let spec = game.command_spec(0).unwrap();
    assert!(matches!(spec, Spec::Chain(_)));
    assert_eq!(
        render_usage(&spec.usage()),
        "bid for the first move\n  bid 0-15"
    );
}
