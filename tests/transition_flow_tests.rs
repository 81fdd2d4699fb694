//! Integration tests for board transitions across renders
//!
//! Simulates a board component rendering a sequence of positions: parent
//! re-renders with unchanged props, drag-and-drop commits, rejected drops and
//! two boards living side by side.

use chessboard_transitions::{
    BoardGeometry, BoardOrientation, BoardTransitions, PixelOffset, Position, Square,
    SquareGeometry, TransitionRecords,
};

const GEOMETRY: BoardGeometry = BoardGeometry::new(480, BoardOrientation::White);

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn fen(placement: &str) -> Position {
    Position::from_fen(placement).unwrap()
}

const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";
const AFTER_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR";
const AFTER_NF3: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";

fn origins(records: &TransitionRecords) -> Vec<(String, String)> {
    records
        .iter()
        .map(|(target, record)| (target.to_string(), record.origin_square.to_string()))
        .collect()
}

#[test]
fn test_programmatic_moves_animate() {
    //! Parent pushes new positions with no drag involved; each one animates

    let mut board = BoardTransitions::new(Position::start());

    let records = board.update(&fen(AFTER_E4), &GEOMETRY);
    assert_eq!(origins(records), vec![("e4".into(), "e2".into())]);
    assert_eq!(
        records.get(sq("e4")).unwrap().origin_pixel_offset,
        PixelOffset::new(240.0, 360.0)
    );

    let records = board.update(&fen(AFTER_E5), &GEOMETRY);
    assert_eq!(origins(records), vec![("e5".into(), "e7".into())]);
}

#[test]
fn test_rerenders_between_moves_are_idempotent() {
    //! Unrelated parent state changes re-render the same position many times
    //!
    //! The records for the last real change are handed back unchanged every
    //! time so in-flight animations are not restarted or cancelled.

    let mut board = BoardTransitions::new(Position::start());
    let first = board.update(&fen(AFTER_E4), &GEOMETRY).clone();

    for _ in 0..5 {
        assert_eq!(board.update(&fen(AFTER_E4), &GEOMETRY), &first);
    }
}

#[test]
fn test_drag_and_drop_commit_is_not_reanimated() {
    //! The user dragged e2-e4; the piece is already on e4 on screen
    //!
    //! The board disables inference before committing, so the commit render
    //! produces no transition, and the opponent's reply animates normally.

    let mut board = BoardTransitions::new(Position::start());

    board.disable_transition_in_next_position();
    assert!(board.update(&fen(AFTER_E4), &GEOMETRY).is_empty());

    let records = board.update(&fen(AFTER_E5), &GEOMETRY);
    assert_eq!(origins(records), vec![("e5".into(), "e7".into())]);
}

#[test]
fn test_suppression_survives_unchanged_rerenders() {
    //! Redundant renders between disable() and the commit do not use up the window

    let mut board = BoardTransitions::new(fen(AFTER_E5));
    board.disable_transition_in_next_position();

    board.update(&fen(AFTER_E5), &GEOMETRY);
    board.update(&fen(AFTER_E5), &GEOMETRY);
    assert!(board.is_suppressed());

    assert!(board.update(&fen(AFTER_NF3), &GEOMETRY).is_empty());
    assert!(!board.is_suppressed());
}

#[test]
fn test_suppression_spans_exactly_one_change() {
    //! disable(), one change (suppressed), another change (normal diff vs the second)

    let mut board = BoardTransitions::new(Position::start());
    board.disable_transition_in_next_position();

    assert!(board.update(&fen(AFTER_E4), &GEOMETRY).is_empty());
    assert!(board.update(&fen(AFTER_E4), &GEOMETRY).is_empty());

    let records = board.update(&fen(AFTER_E5), &GEOMETRY);
    assert_eq!(records.len(), 1);
    assert_eq!(records.get(sq("e5")).unwrap().origin_square, sq("e7"));
}

#[test]
fn test_rejected_drop_then_enable() {
    //! A rejected drop re-renders the unchanged position under suppression
    //!
    //! The board re-enables inference once the snap-back is done so the next
    //! real move animates.

    let mut board = BoardTransitions::new(fen(AFTER_E4));

    board.disable_transition_in_next_position();
    assert!(board.update(&fen(AFTER_E4), &GEOMETRY).is_empty());
    board.enable_transition_in_next_position();

    let records = board.update(&fen(AFTER_E5), &GEOMETRY);
    assert_eq!(origins(records), vec![("e5".into(), "e7".into())]);
}

#[test]
fn test_boards_do_not_share_state() {
    //! Suppressing one board leaves another board animating

    let mut left = BoardTransitions::new(Position::start());
    let mut right = BoardTransitions::new(Position::start());

    left.disable_transition_in_next_position();

    assert!(left.update(&fen(AFTER_E4), &GEOMETRY).is_empty());
    assert_eq!(right.update(&fen(AFTER_E4), &GEOMETRY).len(), 1);
}

#[test]
fn test_flipped_board_measured_geometry() {
    //! Geometry is read through the caller's accessor at diff time

    let flipped = BoardGeometry::new(480, BoardOrientation::Black);
    let measured = |square: Square| {
        let ideal = flipped.square_to_pixel(square);
        PixelOffset::new(ideal.x + 12.0, ideal.y + 12.0)
    };

    let mut board = BoardTransitions::new(Position::start());
    let records = board.update(&fen(AFTER_E4), &measured);

    assert_eq!(
        records.get(sq("e4")).unwrap().origin_pixel_offset,
        PixelOffset::new(192.0, 72.0)
    );
}

#[test]
fn test_records_serialize_for_presentation_layer() {
    let mut board = BoardTransitions::new(fen("4k3/8/8/3p4/4P3/8/8/4K3"));
    let records = board.update(&fen("4k3/8/8/3P4/8/8/8/4K3"), &GEOMETRY);

    let json = serde_json::to_value(records).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "d5": {
                "origin_square": "e4",
                "origin_pixel_offset": { "x": 240.0, "y": 240.0 },
                "captured_piece": "bP"
            }
        })
    );
}
