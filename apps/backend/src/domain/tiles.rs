//! Tile value types and their pure derivations.

use serde::{Deserialize, Serialize};

/// One end of a tile: a pip count or the spinner wild marker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    Pip(u8),
    Spinner,
}

impl End {
    /// Points this end contributes to a hand score.
    pub fn score(self) -> u32 {
        match self {
            End::Pip(n) => n as u32,
            End::Spinner => 10,
        }
    }
}

/// Stable identity of a tile within the 66-tile set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

/// Immutable tile value. Position and orientation live on
/// [`crate::domain::board::PlacedTile`]; the ends never change after deck
/// construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub ends: (End, End),
}

impl Tile {
    /// Both ends equal, including spinner/spinner.
    pub fn is_double(&self) -> bool {
        self.ends.0 == self.ends.1
    }

    pub fn is_double_spinner(&self) -> bool {
        self.ends == (End::Spinner, End::Spinner)
    }

    /// Penalty value counted against a seat still holding this tile when
    /// a round ends. The double spinner is a flat 20.
    pub fn score(&self) -> u32 {
        if self.is_double_spinner() {
            20
        } else {
            self.ends.0.score() + self.ends.1.score()
        }
    }

    /// Whether this tile may open a round with the given target: the
    /// target double, or the double spinner.
    pub fn opens_round(&self, round_target: u8) -> bool {
        match self.ends {
            (End::Spinner, End::Spinner) => true,
            (End::Pip(a), End::Pip(b)) => a == b && a == round_target,
            _ => false,
        }
    }
}
