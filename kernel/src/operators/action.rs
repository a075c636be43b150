//! `Action`: the five operators available to the vacuum agent.

use std::fmt;

/// One step the agent can take. Every action costs 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// `x - 1`.
    MoveLeft,
    /// `x + 1`.
    MoveRight,
    /// `y + 1`.
    MoveUp,
    /// `y - 1`.
    MoveDown,
    /// Remove dirt from the agent's cell.
    Suck,
}

impl Action {
    /// All actions in enumeration order. Legal-action lists preserve this order.
    pub const ALL: [Action; 5] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::Suck,
    ];

    /// Stable lowercase name used in reports and fixtures.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MoveLeft => "left",
            Self::MoveRight => "right",
            Self::MoveUp => "up",
            Self::MoveDown => "down",
            Self::Suck => "suck",
        }
    }

    /// Inverse of [`Action::as_str`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }

    #[must_use]
    pub const fn is_move(self) -> bool {
        !matches!(self, Self::Suck)
    }

    /// Unit displacement `(dx, dy)` for move actions; `(0, 0)` for `Suck`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::MoveLeft => (-1, 0),
            Self::MoveRight => (1, 0),
            Self::MoveUp => (0, 1),
            Self::MoveDown => (0, -1),
            Self::Suck => (0, 0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
