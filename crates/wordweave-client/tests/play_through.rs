//! End-to-end flow: backend payload -> puzzle -> game session -> report.

use wordweave_client::{LoadSlot, SessionReport, dto::parse_puzzle};
use wordweave_core::{Correctness, Position, Puzzle, PuzzleError};
use wordweave_game::Game;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const PAYLOAD: &str = r#"{
    "board_size": {"rows": 10, "cols": 10},
    "words": [
        {
            "id": "w1",
            "word": "cat",
            "definition": "feline",
            "coordinate": {"row": 0, "col": 0, "direction": "across"}
        },
        {
            "id": "w2",
            "word": "cage",
            "definition": "enclosure",
            "coordinate": {"row": 0, "col": 0, "direction": "down"}
        }
    ]
}"#;

#[test]
fn payload_to_completed_session() {
    init_logs();
    let mut slot: LoadSlot<Puzzle, String> = LoadSlot::new();
    let ticket = slot.begin();
    let puzzle = parse_puzzle(PAYLOAD).expect("payload is well-formed");
    assert!(slot.accept(ticket, Ok(puzzle)));

    let mut game = Game::new(slot.value().expect("load finished").clone());
    assert_eq!(game.pool().len(), 6);

    for (pos, letter) in [
        (Position::new(0, 0), 'c'),
        (Position::new(0, 1), 'a'),
        (Position::new(0, 2), 't'),
        (Position::new(1, 0), 'a'),
        (Position::new(2, 0), 'g'),
        (Position::new(3, 0), 'e'),
    ] {
        assert!(game.place_letter(pos, letter), "placement at {pos} failed");
        assert_eq!(game.correctness(pos), Some(Correctness::Correct));
    }

    assert!(game.is_solved());
    assert!(game.pool().is_empty());

    let report = SessionReport::from_game(&game);
    assert_eq!(report, SessionReport { score: 70, completed: true });
}

#[test]
fn stale_payload_never_reaches_the_game() {
    init_logs();
    let mut slot: LoadSlot<Puzzle, String> = LoadSlot::new();
    let stale_ticket = slot.begin();
    let current_ticket = slot.begin();

    let stale = parse_puzzle(PAYLOAD).expect("payload is well-formed");
    assert!(!slot.accept(stale_ticket, Ok(stale)));
    assert!(slot.value().is_none());

    assert!(slot.accept(current_ticket, Err("request aborted".to_owned())));
    assert_eq!(slot.error().map(String::as_str), Some("request aborted"));
}

#[test]
fn broken_payload_is_a_load_failure() {
    init_logs();
    let payload = r#"{
        "board_size": {"rows": 3, "cols": 3},
        "words": [
            {
                "id": "w1",
                "word": "giraffe",
                "definition": "tall",
                "coordinate": {"row": 0, "col": 0, "direction": "down"}
            }
        ]
    }"#;

    let err = parse_puzzle(payload).expect_err("word does not fit the board");
    let wordweave_client::LoadError::Puzzle(err) = err else {
        panic!("expected puzzle-data error, got {err}");
    };
    assert!(matches!(err, PuzzleError::WordOutOfBounds { index: 3, .. }));
}
