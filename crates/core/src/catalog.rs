//! Piece catalog - immutable shape, color and rarity definitions
//!
//! Seven standard tetromino-like pieces plus seven special pieces that carry
//! a board effect. Shape matrices are square (2x2, 3x3 or 4x4) so that
//! rotation is a size-preserving transpose-and-reverse and kick logic stays
//! shape-size-agnostic.

use arrayvec::ArrayVec;

use blocktris_types::{ColorId, PieceTypeId, Rarity, SpecialEffect, MAX_SHAPE_SIZE};

/// Square 0/1 shape matrix in a fixed backing array.
///
/// `size` is the logical bounding box (2, 3 or 4); cells outside it are
/// always zero. Copy-cheap so rotation never touches the catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    pub const fn new(size: u8, cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Bounding box edge length (2, 3 or 4)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (x, y) inside the bounding box is filled
    pub fn filled(&self, x: usize, y: usize) -> bool {
        y < self.size as usize && x < self.size as usize && self.cells[y][x] != 0
    }

    /// Offsets of all filled cells, row-major
    pub fn filled_offsets(&self) -> ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        let mut out = ArrayVec::new();
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..n {
                if self.cells[y][x] != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate clockwise: `rotated[x][size-1-y] = cells[y][x]`
    pub fn rotate_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rotated = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                rotated[x][n - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            size: self.size,
            cells: rotated,
        }
    }

    /// Rotate counter-clockwise: `rotated[size-1-x][y] = cells[y][x]`
    pub fn rotate_ccw(&self) -> Self {
        let n = self.size as usize;
        let mut rotated = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                rotated[n - 1 - x][y] = self.cells[y][x];
            }
        }
        Self {
            size: self.size,
            cells: rotated,
        }
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub id: PieceTypeId,
    pub name: &'static str,
    pub color: ColorId,
    pub shape: Shape,
    pub rarity: Rarity,
    pub effect: Option<SpecialEffect>,
}

impl PieceDef {
    pub fn is_special(&self) -> bool {
        self.effect.is_some()
    }

    /// Display color from the palette
    pub fn color_hex(&self) -> &'static str {
        COLOR_PALETTE[self.color as usize]
    }
}

/// Number of entries in each sequencer pool
pub const STANDARD_COUNT: usize = 7;
pub const SPECIAL_COUNT: usize = 7;

/// Display palette, indexed by `ColorId` (one per piece type)
pub const COLOR_PALETTE: [&str; STANDARD_COUNT + SPECIAL_COUNT] = [
    "#00FFFF", // I - cyan
    "#0000FF", // J - blue
    "#FF7F00", // L - orange
    "#FFFF00", // O - yellow
    "#00FF00", // S - green
    "#800080", // T - purple
    "#FF0000", // Z - red
    "#FFA500", // Explosion
    "#FF00FF", // ColorClear
    "#C0C0C0", // Mirror
    "#7DF9FF", // Quantum
    "#87CEEB", // TimeFreeze
    "#FFD700", // Multiplier
    "#8B4513", // Gravity
];

/// The full ordered catalog. Entry order fixes `PieceTypeId` and therefore
/// the letter assignment of the compressed board encoding.
pub static ALL_PIECES: [PieceDef; STANDARD_COUNT + SPECIAL_COUNT] = [
    PieceDef {
        id: 0,
        name: "I",
        color: 0,
        shape: Shape::new(
            4,
            [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 1,
        name: "J",
        color: 1,
        shape: Shape::new(
            3,
            [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 2,
        name: "L",
        color: 2,
        shape: Shape::new(
            3,
            [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 3,
        name: "O",
        color: 3,
        shape: Shape::new(
            2,
            [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 4,
        name: "S",
        color: 4,
        shape: Shape::new(
            3,
            [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 5,
        name: "T",
        color: 5,
        shape: Shape::new(
            3,
            [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 6,
        name: "Z",
        color: 6,
        shape: Shape::new(
            3,
            [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Common,
        effect: None,
    },
    PieceDef {
        id: 7,
        name: "Explosion",
        color: 7,
        shape: Shape::new(
            3,
            [[0, 1, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Rare,
        effect: Some(SpecialEffect::Explosion),
    },
    PieceDef {
        id: 8,
        name: "ColorClear",
        color: 8,
        shape: Shape::new(
            3,
            [[1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Rare,
        effect: Some(SpecialEffect::ColorClear),
    },
    PieceDef {
        id: 9,
        name: "Mirror",
        color: 9,
        shape: Shape::new(
            3,
            [[1, 0, 1, 0], [0, 1, 0, 0], [1, 0, 1, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Rare,
        effect: Some(SpecialEffect::Mirror),
    },
    PieceDef {
        id: 10,
        name: "Quantum",
        color: 10,
        shape: Shape::new(
            3,
            [[1, 1, 1, 0], [1, 0, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Legendary,
        effect: Some(SpecialEffect::Quantum),
    },
    PieceDef {
        id: 11,
        name: "TimeFreeze",
        color: 11,
        shape: Shape::new(
            3,
            [[0, 1, 0, 0], [1, 0, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Rare,
        effect: Some(SpecialEffect::TimeFreeze),
    },
    PieceDef {
        id: 12,
        name: "Multiplier",
        color: 12,
        shape: Shape::new(
            3,
            [[1, 1, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Rare,
        effect: Some(SpecialEffect::Multiplier),
    },
    PieceDef {
        id: 13,
        name: "Gravity",
        color: 13,
        shape: Shape::new(
            3,
            [[1, 1, 1, 0], [1, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]],
        ),
        rarity: Rarity::Rare,
        effect: Some(SpecialEffect::Gravity),
    },
];

/// The seven standard pieces, in catalog order
pub fn standard_pieces() -> &'static [PieceDef] {
    &ALL_PIECES[..STANDARD_COUNT]
}

/// The seven special pieces, in catalog order
pub fn special_pieces() -> &'static [PieceDef] {
    &ALL_PIECES[STANDARD_COUNT..]
}

/// Look up a catalog entry by type id
pub fn piece_by_id(id: PieceTypeId) -> Option<&'static PieceDef> {
    ALL_PIECES.get(id as usize)
}

/// All entries of a given rarity tier, in catalog order
pub fn pieces_by_rarity(rarity: Rarity) -> impl Iterator<Item = &'static PieceDef> {
    ALL_PIECES.iter().filter(move |p| p.rarity == rarity)
}
