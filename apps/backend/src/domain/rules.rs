use crate::domain::board::Anchor;

/// Highest pip value in the double-nine set.
pub const MAX_PIP: u8 = 9;

/// Full set size: 55 pip pairs, 10 spinner/pip tiles, one double spinner.
pub const DECK_SIZE: usize = 66;

/// Round targets count down from double-nine to double-blank.
pub const INITIAL_ROUND_TARGET: u8 = 9;

/// Placements a chain anchor absorbs before the restriction lifts.
pub const CHAIN_QUOTA: u8 = 3;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Default per-axis distance within which a submitted anchor claims an
/// open end. Overridable through engine config.
pub const DEFAULT_ANCHOR_TOLERANCE: f32 = 50.0;

/// Where the opening tile lands, regardless of the submitted anchor.
pub const CENTER_ANCHOR: Anchor = Anchor { x: 0.0, y: 0.0 };

/// Distance from a placed tile to the open-end anchors it emits.
pub const SLOT_SPACING: f32 = 120.0;

// Tiles dealt per seat. Two-player games use the big-hand scheme; the
// alternative 9-tile lineage was not adopted.
pub fn hand_size(player_count: usize) -> Option<usize> {
    match player_count {
        2 => Some(14),
        3..=4 => Some(7),
        _ => None,
    }
}
