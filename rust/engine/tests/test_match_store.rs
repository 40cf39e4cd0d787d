use std::sync::Arc;
use std::thread;

use pokerduel_engine::board::Seat;
use pokerduel_engine::errors::GameError;
use pokerduel_engine::game::Move;
use pokerduel_engine::store::{generate_room_code, MatchStore, MemoryStore, ROOM_CODE_LEN};

fn mv(player: Seat, column: u8) -> Move {
    Move { player, column }
}

#[test]
fn create_then_fetch_returns_the_descriptor() {
    let store = MemoryStore::new();
    let code = store.create(42).unwrap();
    assert_eq!(code.len(), ROOM_CODE_LEN);

    let desc = store.fetch(&code).unwrap();
    assert_eq!(desc.seed, 42);
    assert!(desc.moves.is_empty());
    assert!(desc.one_connected);
    assert!(!desc.two_connected);
}

#[test]
fn fetch_of_an_unknown_code_is_an_error() {
    let store = MemoryStore::new();
    assert_eq!(
        store.fetch("ZZZZ"),
        Err(GameError::MatchNotFound {
            code: "ZZZZ".to_string()
        })
    );
}

#[test]
fn join_claims_the_second_seat_exactly_once() {
    let store = MemoryStore::new();
    let code = store.create(7).unwrap();

    let desc = store.join(&code).unwrap();
    assert_eq!(desc.seed, 7);
    assert!(desc.two_connected);

    assert_eq!(
        store.join(&code),
        Err(GameError::MatchFull { code: code.clone() })
    );
    assert_eq!(
        store.join("QQQQ"),
        Err(GameError::MatchNotFound {
            code: "QQQQ".to_string()
        })
    );
}

#[test]
fn append_succeeds_when_the_observed_length_is_current() {
    let store = MemoryStore::new();
    let code = store.create(42).unwrap();

    let desc = store.append_move(&code, 0, mv(Seat::One, 0)).unwrap();
    assert_eq!(desc.moves.len(), 1);
    let desc = store.append_move(&code, 1, mv(Seat::Two, 3)).unwrap();
    assert_eq!(desc.moves.len(), 2);
    assert_eq!(desc.moves[1].column, 3);
}

#[test]
fn append_with_a_stale_observed_length_is_rejected() {
    let store = MemoryStore::new();
    let code = store.create(42).unwrap();
    store.append_move(&code, 0, mv(Seat::One, 0)).unwrap();

    let err = store.append_move(&code, 0, mv(Seat::Two, 1)).unwrap_err();
    assert_eq!(
        err,
        GameError::StaleWrite {
            observed: 0,
            actual: 1
        }
    );
    // the rejected move was not written
    assert_eq!(store.fetch(&code).unwrap().moves.len(), 1);
}

#[test]
fn concurrent_appends_admit_exactly_one_writer() {
    let store = Arc::new(MemoryStore::new());
    let code = store.create(99).unwrap();

    let handles: Vec<_> = [mv(Seat::One, 0), mv(Seat::One, 1)]
        .into_iter()
        .map(|m| {
            let store = Arc::clone(&store);
            let code = code.clone();
            thread::spawn(move || store.append_move(&code, 0, m))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let ok = results.iter().filter(|r| r.is_ok()).count();
    let stale = results
        .iter()
        .filter(|r| matches!(r, Err(GameError::StaleWrite { .. })))
        .count();
    assert_eq!(ok, 1);
    assert_eq!(stale, 1);
    assert_eq!(store.fetch(&code).unwrap().moves.len(), 1);
}

#[test]
fn room_codes_draw_from_the_unambiguous_alphabet() {
    for _ in 0..200 {
        let code = generate_room_code();
        assert_eq!(code.len(), ROOM_CODE_LEN);
        for ch in code.chars() {
            assert!(
                ch.is_ascii_uppercase() || ch.is_ascii_digit(),
                "unexpected character {:?}",
                ch
            );
            assert!(!matches!(ch, 'I' | 'O' | '0' | '1'), "ambiguous {:?}", ch);
        }
    }
}
