//! Deterministic falling-block game engine
//!
//! Pure game logic with no I/O, no clocks and no rendering: the driver feeds
//! commands and a monotonic millisecond clock into [`GameSession`], and the
//! whole run is reproducible from (game id, seed, command timeline).
//!
//! Module layout:
//! - [`catalog`] - immutable piece definitions (shapes, colors, rarities)
//! - [`board`] - the 10x20 grid and its pure placement/line operations
//! - [`sequencer`] - seed-indexed piece derivation and the session RNG
//! - [`effects`] - special-piece board mutations and bonuses
//! - [`session`] - the state machine tying it all together
//! - [`snapshot`] - read-only view for render layers and serializers

pub mod board;
pub mod catalog;
pub mod effects;
pub mod sequencer;
pub mod session;
pub mod snapshot;

pub use board::{Board, BOARD_SIZE};
pub use catalog::{
    piece_by_id, pieces_by_rarity, special_pieces, standard_pieces, PieceDef, Shape, ALL_PIECES,
    COLOR_PALETTE, SPECIAL_COUNT, STANDARD_COUNT,
};
pub use effects::{EffectOutcome, TimerEffect};
pub use sequencer::{derive_piece, PieceSource, SequenceError, SimpleRng};
pub use session::{ActivePiece, GameSession, KeyFrame, LoggedCommand};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
