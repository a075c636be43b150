//! `WorldState`: the immutable vacuum-world configuration.
//!
//! # Layout
//!
//! A state is the agent's cell plus the set of dirty cells, on a fixed
//! [`GridSpec`]. The dirty set is a `BTreeSet`, so iteration is always in
//! canonical `Position` order regardless of how the set was built.
//!
//! # Equality semantics
//!
//! Two states are equal iff their grids, agent positions and dirty sets are
//! equal (set equality, order-independent). The derived `Eq`/`Hash`/`Ord`
//! implement exactly that, and [`WorldState::identity_bytes`] is the canonical
//! byte form hashed into search fingerprints.
//!
//! # Identity encoding (little-endian)
//!
//! ```text
//! grid_size u32 || agent.x u32 || agent.y u32 || dirty_count u32 || (x u32, y u32)*
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::carrier::position::{GridError, GridSpec, Position};

/// Immutable world configuration: agent position plus dirty cells.
///
/// Construct via [`WorldState::new`], which validates every position against
/// the grid. All transitions produce fresh values; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorldState {
    grid: GridSpec,
    agent: Position,
    dirty: BTreeSet<Position>,
}

impl WorldState {
    /// Build a validated state.
    ///
    /// Duplicate dirty cells collapse into one.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OutOfBounds`] if the agent or any dirty cell lies
    /// outside `grid`.
    pub fn new(
        grid: GridSpec,
        agent: Position,
        dirty: impl IntoIterator<Item = Position>,
    ) -> Result<Self, WorldError> {
        if !grid.contains(agent) {
            return Err(WorldError::OutOfBounds {
                what: PositionRole::Agent,
                position: agent,
                grid_size: grid.size(),
            });
        }
        let mut set = BTreeSet::new();
        for cell in dirty {
            if !grid.contains(cell) {
                return Err(WorldError::OutOfBounds {
                    what: PositionRole::DirtyCell,
                    position: cell,
                    grid_size: grid.size(),
                });
            }
            set.insert(cell);
        }
        Ok(Self {
            grid,
            agent,
            dirty: set,
        })
    }

    /// Build a validated state from a raw grid size.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Grid`] for a zero grid size, or
    /// [`WorldError::OutOfBounds`] as in [`WorldState::new`].
    pub fn with_grid_size(
        grid_size: u32,
        agent: Position,
        dirty: impl IntoIterator<Item = Position>,
    ) -> Result<Self, WorldError> {
        let grid = GridSpec::new(grid_size)?;
        Self::new(grid, agent, dirty)
    }

    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    #[must_use]
    pub fn agent(&self) -> Position {
        self.agent
    }

    /// Dirty cells in canonical order.
    #[must_use]
    pub fn dirty(&self) -> &BTreeSet<Position> {
        &self.dirty
    }

    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// True iff no dirty cells remain.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    #[must_use]
    pub fn is_dirty_at(&self, pos: Position) -> bool {
        self.dirty.contains(&pos)
    }

    /// Copy of this state with the agent moved to `agent`.
    ///
    /// Kernel-internal: callers outside the crate go through
    /// `operators::apply`, which checks bounds first.
    pub(crate) fn with_agent(&self, agent: Position) -> Self {
        Self {
            grid: self.grid,
            agent,
            dirty: self.dirty.clone(),
        }
    }

    /// Copy of this state with `cell` removed from the dirty set (no-op if clean).
    pub(crate) fn without_dirt(&self, cell: Position) -> Self {
        let mut dirty = self.dirty.clone();
        dirty.remove(&cell);
        Self {
            grid: self.grid,
            agent: self.agent,
            dirty,
        }
    }

    /// Canonical identity bytes (see module docs for the layout).
    ///
    /// Used for fingerprinting (visited-set dedup, cycle detection).
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.dirty.len() * 8);
        out.extend_from_slice(&self.grid.size().to_le_bytes());
        out.extend_from_slice(&self.agent.to_le_bytes());
        #[allow(clippy::cast_possible_truncation)]
        let count = self.dirty.len() as u32;
        out.extend_from_slice(&count.to_le_bytes());
        for cell in &self.dirty {
            out.extend_from_slice(&cell.to_le_bytes());
        }
        out
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent={} dirty=[", self.agent)?;
        for (i, cell) in self.dirty.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        f.write_str("]")
    }
}

/// Which input an out-of-bounds position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRole {
    Agent,
    DirtyCell,
}

impl fmt::Display for PositionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent => f.write_str("agent position"),
            Self::DirtyCell => f.write_str("dirty cell"),
        }
    }
}

/// Typed failure for state construction. Fail-closed: no state is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The grid itself is invalid.
    Grid(GridError),
    /// A position lies outside the grid.
    OutOfBounds {
        what: PositionRole,
        position: Position,
        grid_size: u32,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::OutOfBounds {
                what,
                position,
                grid_size,
            } => write!(
                f,
                "{what} {position} lies outside the {grid_size}x{grid_size} grid"
            ),
        }
    }
}

impl std::error::Error for WorldError {}

impl From<GridError> for WorldError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
