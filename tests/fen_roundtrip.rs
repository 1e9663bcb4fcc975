//! FEN round-trip laws from spec §8: `fen_emit(fen_parse(f)) == canonical(f)`
//! for a sample of positions, plus the canonical starting FEN.

use chess_core::board::Board;

const SAMPLE_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
    "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1",
    "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
    "8/P7/8/8/8/8/8/k6K w - - 0 1",
];

#[test]
fn start_position_matches_the_canonical_fen() {
    assert_eq!(
        Board::start_position().to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn sample_fens_round_trip_through_parse_and_emit() {
    for &fen in SAMPLE_FENS {
        let board = Board::try_from_fen(fen).unwrap();
        let emitted = board.to_fen();
        let reparsed = Board::try_from_fen(&emitted).unwrap();
        assert_eq!(
            reparsed.to_fen(),
            emitted,
            "FEN {fen} did not round-trip stably"
        );
    }
}

#[test]
fn fullmove_field_is_always_emitted_as_one() {
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 5 42").unwrap();
    assert!(board.to_fen().ends_with(" 1"));
}

#[test]
fn halfmove_clock_round_trips() {
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 17 1").unwrap();
    assert!(board.to_fen().contains(" 17 "));
}
