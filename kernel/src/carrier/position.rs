//! Grid geometry: cell positions and the square grid they live on.

use std::fmt;

/// A cell on the square grid.
///
/// `x` grows to the right, `y` grows upward. Derives `Ord` so dirty sets
/// stored in a `BTreeSet` iterate in a canonical order (x first, then y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`. Widened to `u64`: two full-axis spans
    /// exceed `u32::MAX`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Little-endian identity encoding: `x u32 LE || y u32 LE`.
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.x.to_le_bytes());
        out[4..].copy_from_slice(&self.y.to_le_bytes());
        out
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square grid of `size × size` cells, indexed `0..size` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSpec {
    size: u32,
}

impl GridSpec {
    /// The grid size used by the reference scenarios.
    pub const REFERENCE_SIZE: u32 = 5;

    /// Construct a grid of `size × size` cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidGridSize`] if `size` is zero.
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidGridSize { size });
        }
        Ok(Self { size })
    }

    #[must_use]
    pub fn size(self) -> u32 {
        self.size
    }

    /// Largest valid coordinate on either axis.
    #[must_use]
    pub fn max_coord(self) -> u32 {
        self.size - 1
    }

    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Every cell of the grid in canonical (`Position` ordering) order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (0..self.size).flat_map(move |x| (0..self.size).map(move |y| Position::new(x, y)))
    }
}

/// Grid construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid size must be at least 1.
    InvalidGridSize { size: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { size } => {
                write!(f, "grid size must be positive, got {size}")
            }
        }
    }
}

impl std::error::Error for GridError {}
