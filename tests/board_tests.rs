//! Integration tests for board operations and special effects

use blocktris::core::{Board, SimpleRng};
use blocktris::core::effects;
use blocktris::types::{LockedCell, SpecialEffect};

fn cell(piece: u8) -> LockedCell {
    LockedCell {
        color: piece,
        piece,
        effect: None,
    }
}

#[test]
fn test_board_dimensions() {
    let board = Board::new();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cells().len(), 200);
    assert!(board.is_empty());
}

#[test]
fn test_line_clear_pipeline() {
    let mut board = Board::new();
    // Two full rows with a survivor between them
    for x in 0..10i8 {
        board = board.with_cell(x, 17, Some(cell(1)));
        board = board.with_cell(x, 19, Some(cell(2)));
    }
    board = board.with_cell(3, 18, Some(cell(3)));

    let full: Vec<usize> = board.full_rows().into_iter().collect();
    assert_eq!(full, vec![17, 19]);

    let cleared = board.clear_rows(&full);
    // The survivor drops by one (only one removed row was beneath it)
    assert_eq!(cleared.get(3, 19), Some(Some(cell(3))));
    assert_eq!(cleared.occupied_count(), 1);
}

#[test]
fn test_explosion_then_gravity_chain() {
    let mut board = Board::new();
    // A tower in column 5 with a gap-free base
    for y in 14..20i8 {
        board = board.with_cell(5, y, Some(cell(1)));
    }

    let exploded = effects::apply(&board, SpecialEffect::Explosion, 5, 16, &mut SimpleRng::new(1));
    // Rows 15..=17 of the tower are gone
    assert_eq!(exploded.bonus, 30);
    assert!(!exploded.board.is_occupied(5, 16));
    assert!(exploded.board.is_occupied(5, 14));

    let compacted = effects::apply(
        &exploded.board,
        SpecialEffect::Gravity,
        0,
        0,
        &mut SimpleRng::new(1),
    );
    // The floating remainder settles onto the base
    assert!(compacted.board.is_occupied(5, 19));
    assert!(compacted.board.is_occupied(5, 17));
    assert!(!compacted.board.is_occupied(5, 14));
}

#[test]
fn test_mirror_preserves_full_rows() {
    let mut board = Board::new();
    for x in 0..10i8 {
        board = board.with_cell(x, 19, Some(cell(1)));
    }
    let mirrored = effects::apply(&board, SpecialEffect::Mirror, 0, 0, &mut SimpleRng::new(1));
    assert!(mirrored.board.is_row_full(19));
}

#[test]
fn test_color_clear_across_whole_board() {
    let mut board = Board::new();
    for y in 0..20i8 {
        board = board.with_cell(0, y, Some(cell(4)));
        board = board.with_cell(9, y, Some(cell(6)));
    }
    let outcome = effects::apply(&board, SpecialEffect::ColorClear, 0, 10, &mut SimpleRng::new(1));
    assert_eq!(outcome.bonus, 20 * 5);
    assert_eq!(outcome.board.occupied_count(), 20);
    assert!(outcome.board.is_occupied(9, 0));
    assert!(!outcome.board.is_occupied(0, 0));
}
