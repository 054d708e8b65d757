//! 8-way compass headings.
//!
//! Codes 1..8 run clockwise starting at north-west; north is `+y`.  The
//! codes are part of the persisted node state, so the discriminants are
//! fixed and explicit.

use manet_core::RandomSource;

/// A compass direction.  `rotated_cw` advances one notch clockwise, which
/// is how the boundary policy turns nodes away from the grid edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Heading {
    NorthWest = 1,
    North = 2,
    NorthEast = 3,
    East = 4,
    SouthEast = 5,
    South = 6,
    SouthWest = 7,
    West = 8,
}

/// All headings in code order, for uniform sampling.
const ALL: [Heading; 8] = [
    Heading::NorthWest,
    Heading::North,
    Heading::NorthEast,
    Heading::East,
    Heading::SouthEast,
    Heading::South,
    Heading::SouthWest,
    Heading::West,
];

impl Heading {
    /// The persisted direction code, 1..=8.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Per-axis unit displacement.  Diagonals move both axes, cardinals
    /// one; each component is -1, 0, or 1.
    #[inline]
    pub fn unit_step(self) -> (i32, i32) {
        match self {
            Heading::NorthWest => (-1, 1),
            Heading::North => (0, 1),
            Heading::NorthEast => (1, 1),
            Heading::East => (1, 0),
            Heading::SouthEast => (1, -1),
            Heading::South => (0, -1),
            Heading::SouthWest => (-1, -1),
            Heading::West => (-1, 0),
        }
    }

    /// The next heading clockwise (west wraps back to north-west).
    #[inline]
    pub fn rotated_cw(self) -> Heading {
        match self {
            Heading::NorthWest => Heading::North,
            Heading::North => Heading::NorthEast,
            Heading::NorthEast => Heading::East,
            Heading::East => Heading::SouthEast,
            Heading::SouthEast => Heading::South,
            Heading::South => Heading::SouthWest,
            Heading::SouthWest => Heading::West,
            Heading::West => Heading::NorthWest,
        }
    }

    /// A heading drawn uniformly from all eight.
    #[inline]
    pub fn sample<R: RandomSource>(rng: &mut R) -> Heading {
        ALL[rng.draw(8) as usize]
    }
}
