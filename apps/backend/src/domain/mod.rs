//! Domain layer: pure game rules, no I/O.

pub mod board;
pub mod dealing;
pub mod deck;
pub mod lifecycle;
pub mod rules;
pub mod scoring;
pub mod seeds;
pub mod snapshot;
pub mod state;
pub mod tiles;
pub mod transition;
pub mod turns;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_props;

// Re-exports for ergonomics
pub use dealing::{deal, determine_starting_player};
pub use deck::{full_deck, shuffled_deck};
pub use rules::hand_size;
pub use seeds::derive_deal_seed;
pub use tiles::{End, Tile, TileId};
