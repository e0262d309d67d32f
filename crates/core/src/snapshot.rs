//! Read-only session view for render layers and serializers
//!
//! Decouples consumers from the session's internals: a snapshot is a plain
//! value taken at one instant, safe to hold across further session updates.

use blocktris_types::PieceTypeId;

use crate::board::Board;
use crate::catalog::Shape;
use crate::session::GameSession;

/// The falling piece as seen from outside
#[derive(Debug, Clone, Copy)]
pub struct ActiveSnapshot {
    pub piece: PieceTypeId,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
    pub color_hex: &'static str,
}

/// One instant of a session
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    /// Resting row of the active piece at its current column
    pub ghost_y: Option<i8>,
    pub next_piece: PieceTypeId,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub game_over: bool,
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            board: *session.board(),
            active: session.active().map(|piece| ActiveSnapshot {
                piece: piece.def.id,
                shape: piece.shape,
                x: piece.x,
                y: piece.y,
                rotation: piece.rotation,
                color_hex: piece.def.color_hex(),
            }),
            ghost_y: session.ghost_y(),
            next_piece: session.next_piece().id,
            score: session.score(),
            lines_cleared: session.lines_cleared(),
            level: session.level(),
            game_over: session.game_over(),
        }
    }
}

impl GameSession {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}
