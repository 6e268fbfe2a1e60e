use crate::domain::board::{
    consume_and_extend, find_slot, first_placement_slots, Anchor, Orientation, Side, SlotValue,
};
use crate::domain::rules::{CENTER_ANCHOR, DEFAULT_ANCHOR_TOLERANCE, SLOT_SPACING};
use crate::domain::test_state_helpers::{double_wild, half_wild, pip};
use crate::domain::tiles::End;

#[test]
fn opening_double_emits_a_four_way_hub() {
    let slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    assert_eq!(slots.len(), 4);
    let sides: Vec<Side> = slots.iter().map(|s| s.side).collect();
    assert_eq!(sides, vec![Side::Left, Side::Right, Side::Top, Side::Bottom]);
    assert!(slots.iter().all(|s| s.value == SlotValue::Pip(9)));
}

#[test]
fn opening_double_spinner_resolves_to_the_round_target() {
    let slots = first_placement_slots(double_wild(65), CENTER_ANCHOR, 6);
    assert_eq!(slots.len(), 4);
    assert!(slots.iter().all(|s| s.value == SlotValue::Pip(6)));
}

#[test]
fn opening_non_double_emits_two_slots_with_own_values() {
    let slots = first_placement_slots(pip(1, 2, 7), CENTER_ANCHOR, 9);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].value, SlotValue::Pip(2));
    assert_eq!(slots[0].side, Side::Left);
    assert_eq!(slots[1].value, SlotValue::Pip(7));
    assert_eq!(slots[1].side, Side::Right);
}

#[test]
fn slot_lookup_respects_tolerance_and_picks_the_nearest() {
    let slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    let right = Anchor {
        x: SLOT_SPACING,
        y: 0.0,
    };

    // Dead on, slightly off, and out of range.
    assert_eq!(find_slot(&slots, right, DEFAULT_ANCHOR_TOLERANCE), Some(1));
    let nudged = Anchor {
        x: SLOT_SPACING + 30.0,
        y: -20.0,
    };
    assert_eq!(find_slot(&slots, nudged, DEFAULT_ANCHOR_TOLERANCE), Some(1));
    let far = Anchor {
        x: SLOT_SPACING * 3.0,
        y: 0.0,
    };
    assert_eq!(find_slot(&slots, far, DEFAULT_ANCHOR_TOLERANCE), None);
}

#[test]
fn extension_propagates_matched_and_unmatched_values() {
    // [9|9] hub on the board; lay [9|3] on its right slot.
    let mut slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    let outcome = consume_and_extend(&mut slots, 1, pip(1, 9, 3), Orientation::Deg0, CENTER_ANCHOR);

    assert_eq!(outcome.matched, SlotValue::Pip(9));
    assert_eq!(outcome.unmatched, Some(SlotValue::Pip(3)));
    assert_eq!(slots.len(), 5);

    // The join-facing slot carries the matched value, the far one the
    // free end's value.
    let near = slots.iter().find(|s| s.side == Side::Left && s.tile == pip(1, 9, 3).id);
    let far = slots.iter().find(|s| s.side == Side::Right && s.tile == pip(1, 9, 3).id);
    assert_eq!(near.unwrap().value, SlotValue::Pip(9));
    assert_eq!(far.unwrap().value, SlotValue::Pip(3));
}

#[test]
fn extension_double_becomes_a_hub_of_the_matched_value() {
    let mut slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    let outcome = consume_and_extend(&mut slots, 1, pip(2, 9, 9), Orientation::Deg0, CENTER_ANCHOR);

    assert_eq!(outcome.unmatched, None);
    // 3 hub slots remain from the opener, plus 4 new ones.
    assert_eq!(slots.len(), 7);
    let new: Vec<_> = slots.iter().filter(|s| s.tile == pip(2, 9, 9).id).collect();
    assert_eq!(new.len(), 4);
    assert!(new.iter().all(|s| s.value == SlotValue::Pip(9)));
}

#[test]
fn vertical_orientation_emits_a_vertical_pair() {
    let mut slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    consume_and_extend(&mut slots, 3, pip(1, 9, 5), Orientation::Deg90, CENTER_ANCHOR);

    let new: Vec<_> = slots.iter().filter(|s| s.tile == pip(1, 9, 5).id).collect();
    assert_eq!(new.len(), 2);
    assert!(new
        .iter()
        .all(|s| s.side == Side::Top || s.side == Side::Bottom));
}

#[test]
fn matched_wild_end_resolves_the_free_end_to_its_face() {
    // [W|3] laid with the spinner end against a 9 slot: the free slot is
    // a concrete 3.
    let mut slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    let outcome =
        consume_and_extend(&mut slots, 1, half_wild(60, 3), Orientation::Deg0, CENTER_ANCHOR);

    assert_eq!(outcome.matched, SlotValue::Pip(9));
    assert_eq!(outcome.unmatched, Some(SlotValue::Pip(3)));
}

#[test]
fn unmatched_wild_end_leaves_a_wild_slot() {
    // [9|W] laid with the pip end against a 9 slot: the spinner end's
    // slot stays wild and accepts only spinner ends thereafter.
    let mut slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    let outcome =
        consume_and_extend(&mut slots, 1, half_wild(66, 9), Orientation::Deg0, CENTER_ANCHOR);

    assert_eq!(outcome.matched, SlotValue::Pip(9));
    assert_eq!(outcome.unmatched, Some(SlotValue::Wild));

    let wild_slot = slots.iter().find(|s| s.value == SlotValue::Wild).unwrap();
    assert!(!wild_slot.value.accepts(End::Pip(9)));
    assert!(wild_slot.value.accepts(End::Spinner));
}

#[test]
fn pip_match_takes_precedence_over_a_wild_end() {
    // [W|9] on a 9 slot mates on the 9, so the free end is the spinner.
    let mut slots = first_placement_slots(pip(0, 9, 9), CENTER_ANCHOR, 9);
    let outcome =
        consume_and_extend(&mut slots, 0, half_wild(61, 9), Orientation::Deg0, CENTER_ANCHOR);
    assert_eq!(outcome.unmatched, Some(SlotValue::Wild));
}

#[test]
fn slot_values_accept_equal_pips_and_any_spinner() {
    assert!(SlotValue::Pip(4).accepts(End::Pip(4)));
    assert!(!SlotValue::Pip(4).accepts(End::Pip(5)));
    assert!(SlotValue::Pip(4).accepts(End::Spinner));
    assert!(SlotValue::Wild.accepts(End::Spinner));
    assert!(!SlotValue::Wild.accepts(End::Pip(4)));
}
