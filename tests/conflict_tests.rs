use rclics::core::conflict::{ConflictScope, conflicting_days, has_conflict, has_conflict_in_scope};
use rclics::models::days::{WeekDays, Weekday};
use rclics::models::entry::Entry;
use rclics::models::week_key::WeekKey;

use Weekday::*;

fn entry(id: &str, owner: &str, days: &[Weekday]) -> Entry {
    Entry {
        id: id.into(),
        week: WeekKey::from_raw("32024"),
        ian: "16-041".into(),
        activity: "7901".into(),
        object: "0001".into(),
        days: WeekDays::from_days(days),
        owner_id: owner.into(),
        created_at: "2024-01-15T09:00:00+00:00".into(),
    }
}

#[test]
fn test_no_entries_means_no_conflict() {
    assert!(!has_conflict(&WeekDays::all(), &[], None));
}

#[test]
fn test_disjoint_days_do_not_conflict_in_either_direction() {
    let a = WeekDays::from_days(&[Monday, Tuesday]);
    let b = WeekDays::from_days(&[Wednesday, Thursday]);

    assert!(!has_conflict(&a, &[entry("x", "u", &[Wednesday, Thursday])], None));
    assert!(!has_conflict(&b, &[entry("y", "u", &[Monday, Tuesday])], None));
}

#[test]
fn test_any_single_overlapping_day_conflicts() {
    for day in Weekday::ALL {
        let candidate = WeekDays::from_days(&[day]);
        let stored = [entry("x", "u", &[day])];
        assert!(has_conflict(&candidate, &stored, None), "{:?}", day);
    }
}

#[test]
fn test_every_entry_is_checked_not_only_the_first() {
    let stored = [
        entry("a", "u", &[Monday]),
        entry("b", "u", &[Tuesday]),
        entry("c", "u", &[Friday]),
    ];
    assert!(has_conflict(&WeekDays::from_days(&[Friday]), &stored, None));
    assert!(!has_conflict(&WeekDays::from_days(&[Wednesday, Thursday]), &stored, None));
}

#[test]
fn test_excluded_entry_never_conflicts_with_itself() {
    let stored = [entry("me", "u", &[Monday, Tuesday])];
    let same_days = WeekDays::from_days(&[Monday, Tuesday]);

    assert!(has_conflict(&same_days, &stored, None));
    assert!(!has_conflict(&same_days, &stored, Some("me")));
    // excluding another id does not hide the real conflict
    assert!(has_conflict(&same_days, &stored, Some("other")));
}

#[test]
fn test_week_scope_ignores_owner() {
    let stored = [entry("a", "alice", &[Monday])];
    let candidate = WeekDays::from_days(&[Monday]);

    assert!(has_conflict_in_scope(&candidate, &stored, None, ConflictScope::Week, "bob"));
}

#[test]
fn test_owner_scope_only_compares_same_owner() {
    let stored = [entry("a", "alice", &[Monday]), entry("b", "bob", &[Tuesday])];

    let monday = WeekDays::from_days(&[Monday]);
    assert!(!has_conflict_in_scope(&monday, &stored, None, ConflictScope::Owner, "bob"));
    assert!(has_conflict_in_scope(&monday, &stored, None, ConflictScope::Owner, "alice"));

    let tuesday = WeekDays::from_days(&[Tuesday]);
    assert!(has_conflict_in_scope(&tuesday, &stored, None, ConflictScope::Owner, "bob"));
}

#[test]
fn test_conflicting_days_lists_each_day_once_in_order() {
    let stored = [
        entry("a", "u", &[Friday, Tuesday]),
        entry("b", "u", &[Tuesday, Wednesday]),
    ];
    let candidate = WeekDays::from_days(&[Tuesday, Wednesday, Friday, Monday]);

    assert_eq!(
        conflicting_days(&candidate, &stored, None, ConflictScope::Week, ""),
        vec![Tuesday, Wednesday, Friday]
    );
    assert_eq!(
        conflicting_days(&candidate, &stored, Some("b"), ConflictScope::Week, ""),
        vec![Tuesday, Friday]
    );
}
