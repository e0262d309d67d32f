//! Effect engine - special-piece board mutations and score bonuses
//!
//! Every effect is a pure function of (board, anchor) except quantum, which
//! additionally draws from the session's seeded RNG so that replays stay
//! deterministic. The anchor is the center cell of the locked piece's
//! bounding box.

use blocktris_types::{LockedCell, SpecialEffect};

use crate::board::Board;
use crate::sequencer::SimpleRng;

/// Timer windows an effect may open; the session turns these into expiry
/// timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// Halve gravity speed for a fixed window
    Freeze,
    /// Double score increments for a fixed window
    Multiplier,
}

/// Result of applying an effect
#[derive(Debug, Clone, Copy)]
pub struct EffectOutcome {
    pub board: Board,
    pub bonus: u32,
    pub timer: Option<TimerEffect>,
}

impl EffectOutcome {
    fn board_only(board: Board, bonus: u32) -> Self {
        Self {
            board,
            bonus,
            timer: None,
        }
    }
}

/// Apply a special effect anchored at (x, y).
///
/// Unknown anchors and empty targets degrade to identity with zero bonus;
/// effects never fail.
pub fn apply(
    board: &Board,
    effect: SpecialEffect,
    anchor_x: i8,
    anchor_y: i8,
    rng: &mut SimpleRng,
) -> EffectOutcome {
    match effect {
        SpecialEffect::Explosion => explosion(board, anchor_x, anchor_y),
        SpecialEffect::ColorClear => color_clear(board, anchor_x, anchor_y),
        SpecialEffect::Mirror => mirror(board),
        SpecialEffect::Quantum => quantum(board, rng),
        SpecialEffect::TimeFreeze => EffectOutcome {
            board: *board,
            bonus: 75,
            timer: Some(TimerEffect::Freeze),
        },
        SpecialEffect::Multiplier => EffectOutcome {
            board: *board,
            bonus: 50,
            timer: Some(TimerEffect::Multiplier),
        },
        SpecialEffect::Gravity => gravity(board),
    }
}

/// Clear the 3x3 block centered on the anchor; +10 per cleared cell
fn explosion(board: &Board, anchor_x: i8, anchor_y: i8) -> EffectOutcome {
    let mut next = *board;
    let mut bonus = 0;
    for y in anchor_y - 1..=anchor_y + 1 {
        for x in anchor_x - 1..=anchor_x + 1 {
            if next.is_occupied(x, y) {
                next = next.with_cell(x, y, None);
                bonus += 10;
            }
        }
    }
    EffectOutcome::board_only(next, bonus)
}

/// Clear every cell sharing the anchor cell's color; +5 per cell. Empty
/// anchor is a no-op.
fn color_clear(board: &Board, anchor_x: i8, anchor_y: i8) -> EffectOutcome {
    let target = match board.get(anchor_x, anchor_y) {
        Some(Some(cell)) => cell.color,
        _ => return EffectOutcome::board_only(*board, 0),
    };

    let mut next = *board;
    let mut bonus = 0;
    for y in 0..board.height() as i8 {
        for x in 0..board.width() as i8 {
            if let Some(Some(cell)) = next.get(x, y) {
                if cell.color == target {
                    next = next.with_cell(x, y, None);
                    bonus += 5;
                }
            }
        }
    }
    EffectOutcome::board_only(next, bonus)
}

/// Reverse every row left-right; flat +100
fn mirror(board: &Board) -> EffectOutcome {
    let mut next = *board;
    let width = board.width() as i8;
    for y in 0..board.height() as i8 {
        for x in 0..width {
            next = next.with_cell(
                x,
                y,
                board.get(width - 1 - x, y).unwrap_or(None),
            );
        }
    }
    EffectOutcome::board_only(next, 100)
}

/// Permute the contents of all occupied cells across the same positions
/// using a seeded Fisher-Yates; +200
fn quantum(board: &Board, rng: &mut SimpleRng) -> EffectOutcome {
    let mut positions: Vec<(i8, i8)> = Vec::new();
    let mut contents: Vec<LockedCell> = Vec::new();

    for y in 0..board.height() as i8 {
        for x in 0..board.width() as i8 {
            if let Some(Some(cell)) = board.get(x, y) {
                positions.push((x, y));
                contents.push(cell);
            }
        }
    }

    rng.shuffle(&mut contents);

    let mut next = *board;
    for ((x, y), cell) in positions.into_iter().zip(contents) {
        next = next.with_cell(x, y, Some(cell));
    }
    EffectOutcome::board_only(next, 200)
}

/// Compact every column downward, preserving relative vertical order; +50
fn gravity(board: &Board) -> EffectOutcome {
    let mut next = Board::new();
    for x in 0..board.width() as i8 {
        let mut column: Vec<LockedCell> = Vec::new();
        for y in 0..board.height() as i8 {
            if let Some(Some(cell)) = board.get(x, y) {
                column.push(cell);
            }
        }
        let mut y = board.height() as i8 - 1;
        while let Some(cell) = column.pop() {
            next = next.with_cell(x, y, Some(cell));
            y -= 1;
        }
    }
    EffectOutcome::board_only(next, 50)
}
