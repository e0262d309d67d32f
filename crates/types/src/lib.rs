//! Core types shared across the engine
//! This crate contains pure data types and constants with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Largest shape bounding box in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Game timing constants (in milliseconds)
pub const BASE_GRAVITY_MS: u64 = 1000;
pub const GRAVITY_FLOOR_MS: u64 = 100;
pub const GRAVITY_DECAY: f64 = 0.95;
pub const TIME_FREEZE_WINDOW_MS: u64 = 10_000;
pub const MULTIPLIER_WINDOW_MS: u64 = 30_000;

/// Line clear base scores, indexed by lines cleared at once (0..=4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Bonus awarded when a clear leaves the board completely empty
pub const PERFECT_CLEAR_BONUS: u32 = 1500;

/// Points per row descended during a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Sequencer derivation: values are bounded to [0, 100); values below the
/// threshold draw from the special pool
pub const SEQUENCE_MODULUS: u64 = 100;
pub const SPECIAL_THRESHOLD: u64 = 15;

/// Identifies a catalog entry; also the letter index in the compressed
/// board encoding ('A' + id)
pub type PieceTypeId = u8;

/// Color identity of a locked cell; the colorClear effect matches on this
pub type ColorId = u8;

/// Discrete commands accepted by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Down,
    RotateCw,
    RotateCcw,
    HardDrop,
}

impl Command {
    /// Parse a command from its external token (case-insensitive)
    pub fn from_token(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "down" => Some(Command::Down),
            "rotateclockwise" => Some(Command::RotateCw),
            "rotatecounterclockwise" => Some(Command::RotateCcw),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    /// External token for this command
    pub fn as_token(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::RotateCw => "rotateClockwise",
            Command::RotateCcw => "rotateCounterClockwise",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Cw,
    Ccw,
}

/// Board-mutating or timer effects carried by special pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialEffect {
    Explosion,
    ColorClear,
    Mirror,
    Quantum,
    TimeFreeze,
    Multiplier,
    Gravity,
}

impl SpecialEffect {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "explosion" => Some(SpecialEffect::Explosion),
            "colorClear" => Some(SpecialEffect::ColorClear),
            "mirror" => Some(SpecialEffect::Mirror),
            "quantum" => Some(SpecialEffect::Quantum),
            "timeFreeze" => Some(SpecialEffect::TimeFreeze),
            "multiplier" => Some(SpecialEffect::Multiplier),
            "gravity" => Some(SpecialEffect::Gravity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialEffect::Explosion => "explosion",
            SpecialEffect::ColorClear => "colorClear",
            SpecialEffect::Mirror => "mirror",
            SpecialEffect::Quantum => "quantum",
            SpecialEffect::TimeFreeze => "timeFreeze",
            SpecialEffect::Multiplier => "multiplier",
            SpecialEffect::Gravity => "gravity",
        }
    }
}

/// Rarity tier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Contents of an occupied board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockedCell {
    pub color: ColorId,
    pub piece: PieceTypeId,
    pub effect: Option<SpecialEffect>,
}

/// Cell on the board (None = empty, Some = locked piece material)
pub type Cell = Option<LockedCell>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_token_roundtrip() {
        for cmd in [
            Command::Left,
            Command::Right,
            Command::Down,
            Command::RotateCw,
            Command::RotateCcw,
            Command::HardDrop,
        ] {
            assert_eq!(Command::from_token(cmd.as_token()), Some(cmd));
        }
        assert_eq!(Command::from_token("hold"), None);
    }

    #[test]
    fn test_effect_str_roundtrip() {
        for effect in [
            SpecialEffect::Explosion,
            SpecialEffect::ColorClear,
            SpecialEffect::Mirror,
            SpecialEffect::Quantum,
            SpecialEffect::TimeFreeze,
            SpecialEffect::Multiplier,
            SpecialEffect::Gravity,
        ] {
            assert_eq!(SpecialEffect::from_str(effect.as_str()), Some(effect));
        }
        assert_eq!(SpecialEffect::from_str("teleport"), None);
    }

    #[test]
    fn test_line_scores_table() {
        assert_eq!(LINE_SCORES[1], 100);
        assert_eq!(LINE_SCORES[4], 800);
    }
}
