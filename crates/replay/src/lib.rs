//! Replay and finalization layer
//!
//! Turns a terminal [`GameSession`](blocktris_core::GameSession) into a
//! serializable attestation payload: a [`GameSummary`] whose checksum an
//! independent verifier can recompute, plus a [`GameReplay`] carrying the
//! command timeline and per-lock keyframes needed to re-derive the score.
//!
//! This is the only crate in the workspace that knows about serde; the
//! engine stays wire-format-free.

pub mod finalize;
pub mod payload;

pub use finalize::{checksum, compress_board, finalize, verify, FinalizeError};
pub use payload::{FinalizedGame, GameReplay, GameSummary, ReplayAction, ReplayKeyFrame};
