//! BlockTris (workspace facade crate).
//!
//! This package keeps the `blocktris::{core,replay,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use blocktris_core as core;
pub use blocktris_replay as replay;
pub use blocktris_types as types;
