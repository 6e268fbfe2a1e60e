//! Board geometry and the open-end tracker.
//!
//! Adjacency between a submitted placement and the layout is purely an
//! anchor-proximity test against the open-end slots; pip compatibility is
//! the turn controller's job. Slot anchors double as the finalized
//! positions of the tiles that later consume them.

use serde::{Deserialize, Serialize};

use crate::domain::rules::SLOT_SPACING;
use crate::domain::tiles::{End, Tile, TileId};

/// Presentation-space coordinate. The engine never renders these; they
/// exist solely for the anchor-proximity adjacency test.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Per-axis proximity check; the sole adjacency test.
    pub fn within(self, other: Anchor, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    fn distance_sq(self, other: Anchor) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Horizontal tiles extend the line along the x axis, vertical ones
    /// along y.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Deg0 | Orientation::Deg180)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Value an open end will accept. `Wild` appears only when a half-wild
/// tile is laid with its spinner end pointing away from the join; such a
/// slot accepts spinner ends exclusively from then on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotValue {
    Pip(u8),
    Wild,
}

impl SlotValue {
    pub fn accepts(self, end: End) -> bool {
        match (self, end) {
            (SlotValue::Pip(v), End::Pip(n)) => v == n,
            (_, End::Spinner) => true,
            (SlotValue::Wild, End::Pip(_)) => false,
        }
    }
}

fn slot_value_of(end: End) -> SlotValue {
    match end {
        End::Pip(n) => SlotValue::Pip(n),
        End::Spinner => SlotValue::Wild,
    }
}

/// A playable slot on the board: which tile owns it, what it accepts,
/// and where the mating tile must land.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenEnd {
    pub tile: TileId,
    pub value: SlotValue,
    pub anchor: Anchor,
    pub side: Side,
}

/// A tile fixed to the board with its final position and orientation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: Tile,
    pub position: Anchor,
    pub orientation: Orientation,
}

/// Placed tiles in play order; append-only within a round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    placed: Vec<PlacedTile>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tile: PlacedTile) {
        self.placed.push(tile);
    }

    pub fn position_of(&self, id: TileId) -> Option<Anchor> {
        self.placed
            .iter()
            .find(|p| p.tile.id == id)
            .map(|p| p.position)
    }

    pub fn tiles(&self) -> &[PlacedTile] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

fn hub_slots(tile: TileId, position: Anchor, value: SlotValue) -> Vec<OpenEnd> {
    vec![
        OpenEnd {
            tile,
            value,
            anchor: position.offset(-SLOT_SPACING, 0.0),
            side: Side::Left,
        },
        OpenEnd {
            tile,
            value,
            anchor: position.offset(SLOT_SPACING, 0.0),
            side: Side::Right,
        },
        OpenEnd {
            tile,
            value,
            anchor: position.offset(0.0, -SLOT_SPACING),
            side: Side::Top,
        },
        OpenEnd {
            tile,
            value,
            anchor: position.offset(0.0, SLOT_SPACING),
            side: Side::Bottom,
        },
    ]
}

/// Slots emitted by the opening placement. A double opens as a four-way
/// hub; its resolved value is the round target when it is the double
/// spinner, its face otherwise.
pub fn first_placement_slots(tile: Tile, position: Anchor, round_target: u8) -> Vec<OpenEnd> {
    if tile.is_double() {
        let hub = match tile.ends {
            (End::Pip(v), _) => SlotValue::Pip(v),
            (End::Spinner, _) => SlotValue::Pip(round_target),
        };
        hub_slots(tile.id, position, hub)
    } else {
        let (a, b) = tile.ends;
        vec![
            OpenEnd {
                tile: tile.id,
                value: slot_value_of(a),
                anchor: position.offset(-SLOT_SPACING, 0.0),
                side: Side::Left,
            },
            OpenEnd {
                tile: tile.id,
                value: slot_value_of(b),
                anchor: position.offset(SLOT_SPACING, 0.0),
                side: Side::Right,
            },
        ]
    }
}

/// Index of the open end nearest the submitted anchor, if any lies
/// within tolerance on both axes.
pub fn find_slot(open_ends: &[OpenEnd], anchor: Anchor, tolerance: f32) -> Option<usize> {
    open_ends
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.anchor.within(anchor, tolerance))
        .min_by(|(_, a), (_, b)| {
            a.anchor
                .distance_sq(anchor)
                .total_cmp(&b.anchor.distance_sq(anchor))
        })
        .map(|(i, _)| i)
}

/// What consuming a slot produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendOutcome {
    pub consumed: OpenEnd,
    /// Value propagated to the hub slots or the join-facing slot.
    pub matched: SlotValue,
    /// Value of the free end's slot; `None` when the tile is a double.
    pub unmatched: Option<SlotValue>,
}

// Which tile end mates with the slot. Pip equality takes precedence over
// a spinner end; callers have already verified that at least one end is
// accepted.
fn mating_ends(tile: Tile, slot: SlotValue) -> (End, End) {
    let (a, b) = tile.ends;
    match slot {
        SlotValue::Pip(v) => {
            if a == End::Pip(v) {
                (a, b)
            } else if b == End::Pip(v) {
                (b, a)
            } else if a == End::Spinner {
                (a, b)
            } else {
                (b, a)
            }
        }
        SlotValue::Wild => {
            if a == End::Spinner {
                (a, b)
            } else {
                (b, a)
            }
        }
    }
}

/// Consume `open_ends[slot_idx]` with `tile` and emit the slots the new
/// placement produces. The tile snaps onto the consumed slot's anchor.
/// `owner_position` is where the slot's owning tile sits; the
/// matched-value slot lands on the side facing it, the free end's slot on
/// the far side. A double becomes a four-way hub carrying the matched
/// value on all four slots.
pub fn consume_and_extend(
    open_ends: &mut Vec<OpenEnd>,
    slot_idx: usize,
    tile: Tile,
    orientation: Orientation,
    owner_position: Anchor,
) -> ExtendOutcome {
    let consumed = open_ends.remove(slot_idx);
    let position = consumed.anchor;
    let matched = consumed.value;

    if tile.is_double() {
        open_ends.extend(hub_slots(tile.id, position, matched));
        return ExtendOutcome {
            consumed,
            matched,
            unmatched: None,
        };
    }

    let (_, unmatched_end) = mating_ends(tile, consumed.value);
    let unmatched = slot_value_of(unmatched_end);

    let (first, second) = if orientation.is_horizontal() {
        (
            (position.offset(-SLOT_SPACING, 0.0), Side::Left),
            (position.offset(SLOT_SPACING, 0.0), Side::Right),
        )
    } else {
        (
            (position.offset(0.0, -SLOT_SPACING), Side::Top),
            (position.offset(0.0, SLOT_SPACING), Side::Bottom),
        )
    };
    let ((near, near_side), (far, far_side)) =
        if first.0.distance_sq(owner_position) <= second.0.distance_sq(owner_position) {
            (first, second)
        } else {
            (second, first)
        };

    open_ends.push(OpenEnd {
        tile: tile.id,
        value: matched,
        anchor: near,
        side: near_side,
    });
    open_ends.push(OpenEnd {
        tile: tile.id,
        value: unmatched,
        anchor: far,
        side: far_side,
    });

    ExtendOutcome {
        consumed,
        matched,
        unmatched: Some(unmatched),
    }
}
