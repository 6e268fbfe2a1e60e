//! Deck construction and shuffling.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, MAX_PIP};
use crate::domain::tiles::{End, Tile, TileId};

/// The full 66-tile set in canonical order: pip pairs, then spinner/pip,
/// the double spinner last. Ids are positional and stable across rounds.
pub fn full_deck() -> Vec<Tile> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut id = 0u8;
    for i in 0..=MAX_PIP {
        for j in i..=MAX_PIP {
            deck.push(Tile {
                id: TileId(id),
                ends: (End::Pip(i), End::Pip(j)),
            });
            id += 1;
        }
    }
    for j in 0..=MAX_PIP {
        deck.push(Tile {
            id: TileId(id),
            ends: (End::Spinner, End::Pip(j)),
        });
        id += 1;
    }
    deck.push(Tile {
        id: TileId(id),
        ends: (End::Spinner, End::Spinner),
    });
    deck
}

/// Fresh deck in uniform random order for the given seed.
pub fn shuffled_deck(seed: u64) -> Vec<Tile> {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}
