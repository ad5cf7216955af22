#![allow(dead_code)]

use scorekeeper::domain::rules::cards_for_round;
use scorekeeper::{GameSession, StoredGame};
use time::macros::datetime;

// Logging is auto-installed for every test binary that pulls this in
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn started_session(players: &[&str]) -> GameSession {
    let mut session = GameSession::new();
    session.set_players(names(players)).unwrap();
    session.start_game(datetime!(2025-06-01 19:30 UTC)).unwrap();
    session
}

/// Everyone predicts 0 and `winner` takes every trick. Passes every check.
pub fn fill_round(session: &mut GameSession, winner: usize) {
    let cards = cards_for_round(session.current_round()) as u8;
    for player in 0..session.player_count() {
        session.set_prediction(player, 0).unwrap();
        session
            .set_actual(player, if player == winner { cards } else { 0 })
            .unwrap();
    }
}

/// Play every round with the trick winner rotating, then finish.
pub fn play_to_end(mut session: GameSession) -> StoredGame {
    let players = session.player_count();
    loop {
        let round = session.current_round();
        fill_round(&mut session, round % players);
        if session.is_last_round() {
            break;
        }
        session.advance_round().unwrap();
    }
    session
        .finish_game(datetime!(2025-06-01 22:00 UTC))
        .unwrap()
}

pub fn finished_game(players: &[&str]) -> StoredGame {
    play_to_end(started_session(players))
}
