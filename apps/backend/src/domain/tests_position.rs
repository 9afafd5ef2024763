use crate::domain::cards::MisfortuneIndex;
use crate::domain::position::correct_position;
use crate::domain::test_cards::card;

fn idx(value: u8) -> MisfortuneIndex {
    MisfortuneIndex::new(value).unwrap()
}

#[test]
fn candidate_between_two_cards() {
    // owned [20, 50, 80], candidate 65 -> slot 2
    let owned = vec![card(1, 20), card(2, 50), card(3, 80)];
    assert_eq!(correct_position(idx(65), &owned).unwrap(), 2);
}

#[test]
fn candidate_below_everything_goes_first() {
    let owned = vec![card(1, 20), card(2, 50), card(3, 80)];
    assert_eq!(correct_position(idx(5), &owned).unwrap(), 0);
}

#[test]
fn candidate_above_everything_goes_last() {
    let owned = vec![card(1, 20), card(2, 50), card(3, 80)];
    assert_eq!(correct_position(idx(99), &owned).unwrap(), 3);
}

#[test]
fn equal_indexes_insert_after_equals() {
    // owned [30, 30], candidate 30 -> slot 2
    let owned = vec![card(1, 30), card(2, 30)];
    assert_eq!(correct_position(idx(30), &owned).unwrap(), 2);
}

#[test]
fn empty_hand_yields_slot_zero() {
    assert_eq!(correct_position(idx(50), &[]).unwrap(), 0);
}

#[test]
fn resolver_is_pure() {
    let owned = vec![card(1, 10), card(2, 40), card(3, 70), card(4, 90)];
    let first = correct_position(idx(55), &owned).unwrap();
    let second = correct_position(idx(55), &owned).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 2);
}

#[test]
fn owned_card_without_index_is_an_integrity_error() {
    let mut owned = vec![card(1, 20)];
    owned[0].misfortune_index = None;
    assert!(correct_position(idx(50), &owned).is_err());
}
