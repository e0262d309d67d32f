//! Finalization - checksum, board compression and the terminal summary
//!
//! A finished session is condensed into a [`FinalizedGame`]: a summary with
//! an integrity checksum plus the replay data needed to re-derive that
//! summary independently. The checksum algorithm is fixed wire format shared
//! with non-Rust verifiers, so every detail here (field order, separator,
//! hex rendering) is load-bearing.

use std::fmt;

use blocktris_core::{Board, GameSession};

use crate::payload::{FinalizedGame, GameReplay, GameSummary, ReplayAction, ReplayKeyFrame};

/// Rolling 32-bit string hash over UTF-16 code units:
/// `h = (h << 5) - h + unit`, wrapping at i32. Negative results render as a
/// minus sign followed by the hex of the magnitude.
fn rolling_hash(input: &str) -> String {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    if hash < 0 {
        format!("-{:x}", (hash as i64).unsigned_abs())
    } else {
        format!("{:x}", hash)
    }
}

/// Integrity checksum over the summary fields, joined with `-` in fixed
/// order: game id, seed, score, lines, duration
pub fn checksum(game_id: &str, seed: u64, score: u32, lines: u32, duration_ms: u64) -> String {
    rolling_hash(&format!(
        "{game_id}-{seed}-{score}-{lines}-{duration_ms}"
    ))
}

/// Encode the board as 200 characters, row-major: `'0'` for empty, else a
/// letter starting at `'A'` indexed by the locked cell's piece type
pub fn compress_board(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| match cell {
            None => '0',
            Some(locked) => (b'A' + locked.piece) as char,
        })
        .collect()
}

/// The only way finalization fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeError {
    /// The session has not reached its terminal state
    GameNotOver,
}

impl fmt::Display for FinalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalizeError::GameNotOver => write!(f, "session is still in progress"),
        }
    }
}

impl std::error::Error for FinalizeError {}

/// Condense a terminal session into its summary and replay payloads
pub fn finalize(session: &GameSession) -> Result<FinalizedGame, FinalizeError> {
    if !session.game_over() {
        return Err(FinalizeError::GameNotOver);
    }

    let duration_ms = session.duration_ms();
    let summary = GameSummary {
        game_id: session.game_id().to_string(),
        seed: session.seed(),
        score: session.score(),
        lines_cleared: session.lines_cleared(),
        level: session.level(),
        duration_ms,
        perfect_clears: session.perfect_clears(),
        specials_used: session.specials_used(),
        board: compress_board(session.board()),
        checksum: checksum(
            session.game_id(),
            session.seed(),
            session.score(),
            session.lines_cleared(),
            duration_ms,
        ),
    };

    let replay = GameReplay {
        game_id: session.game_id().to_string(),
        seed: session.seed(),
        sequence: session.source().sequence().map(<[u64]>::to_vec),
        actions: session.actions().iter().map(ReplayAction::from).collect(),
        key_frames: session
            .key_frames()
            .iter()
            .map(ReplayKeyFrame::from)
            .collect(),
    };

    Ok(FinalizedGame { summary, replay })
}

/// Recompute the checksum from a summary's own fields and compare
pub fn verify(summary: &GameSummary) -> bool {
    summary.checksum
        == checksum(
            &summary.game_id,
            summary.seed,
            summary.score,
            summary.lines_cleared,
            summary.duration_ms,
        )
}
