//! JSON payload types for summaries and replays
//!
//! Serde lives only in this crate; engine types convert in via `From` so the
//! core stays serialization-free. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use blocktris_core::{KeyFrame, LoggedCommand};

use crate::finalize::compress_board;

/// Terminal result of a session, carrying its integrity checksum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    pub seed: u64,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub duration_ms: u64,
    pub perfect_clears: u32,
    pub specials_used: u32,
    /// Final board as 200 characters, '0' empty, 'A' + piece type otherwise
    pub board: String,
    pub checksum: String,
}

/// One recorded command with its session-clock timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayAction {
    pub command: String,
    pub at_ms: u64,
}

impl From<&LoggedCommand> for ReplayAction {
    fn from(logged: &LoggedCommand) -> Self {
        Self {
            command: logged.command.as_token().to_string(),
            at_ms: logged.at_ms,
        }
    }
}

/// Compressed board state captured at a lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayKeyFrame {
    pub board: String,
    pub score: u32,
    pub lines_cleared: u32,
    pub at_ms: u64,
}

impl From<&KeyFrame> for ReplayKeyFrame {
    fn from(frame: &KeyFrame) -> Self {
        Self {
            board: compress_board(&frame.board),
            score: frame.score,
            lines_cleared: frame.lines_cleared,
            at_ms: frame.at_ms,
        }
    }
}

/// Everything an independent verifier needs to re-run the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReplay {
    pub game_id: String,
    pub seed: u64,
    /// Present only for sessions driven by a precomputed value sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<u64>>,
    pub actions: Vec<ReplayAction>,
    pub key_frames: Vec<ReplayKeyFrame>,
}

/// Summary plus replay, the full attestation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedGame {
    pub summary: GameSummary,
    pub replay: GameReplay,
}

impl FinalizedGame {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}
