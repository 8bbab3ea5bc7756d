use chrono::NaiveDate;
use rclics::core::conflict::ConflictScope;
use rclics::core::del::DeleteLogic;
use rclics::core::save::{SaveLogic, SaveOptions, SaveOutcome};
use rclics::db::migrate::{is_migration_applied, pad_week_keys};
use rclics::db::store::{EntryStore, RESULT_LIMIT};
use rclics::errors::{AppError, ErrorKind};
use rclics::models::days::Weekday::{self, *};
use rclics::models::week_key::{WeekKey, WeekKeyFormat};

mod common;
use common::{form, mem_pool};

fn jan15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn legacy() -> SaveOptions {
    SaveOptions {
        format: WeekKeyFormat::Legacy,
        scope: ConflictScope::Week,
    }
}

fn padded() -> SaveOptions {
    SaveOptions {
        format: WeekKeyFormat::Padded,
        scope: ConflictScope::Week,
    }
}

fn dop(days: &[Weekday]) -> rclics::models::entry::EntryForm {
    form("16-041", "7901", "0001", days)
}

#[test]
fn test_conflicting_days_are_rejected_and_free_days_accepted() {
    let mut pool = mem_pool();

    let first = SaveLogic::apply(&mut pool, &dop(&[Monday, Tuesday]), jan15(), None, "alice", legacy())
        .expect("first save");
    assert!(matches!(first, SaveOutcome::Created(_)));

    let stored = pool.find(first.id()).unwrap().unwrap();
    assert_eq!(stored.week.as_str(), "32024");

    let err = SaveLogic::apply(&mut pool, &dop(&[Tuesday, Wednesday]), jan15(), None, "alice", legacy())
        .unwrap_err();
    match &err {
        AppError::Conflict { week, days } => {
            assert_eq!(week, "32024");
            assert_eq!(days, &vec![Tuesday]);
        }
        other => panic!("expected a conflict, got {:?}", other),
    }
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(err.is_user_correctable());

    SaveLogic::apply(&mut pool, &dop(&[Wednesday, Thursday]), jan15(), None, "alice", legacy())
        .expect("free days must be accepted");

    let week = pool.list_for_week(&WeekKey::from_raw("32024")).unwrap();
    assert_eq!(week.len(), 2);
}

#[test]
fn test_rejected_save_writes_nothing() {
    let mut pool = mem_pool();
    SaveLogic::apply(&mut pool, &dop(&[Friday]), jan15(), None, "alice", legacy()).unwrap();

    let invalid = form("123-45", "7901", "0001", &[Monday]);
    let err = SaveLogic::apply(&mut pool, &invalid, jan15(), None, "alice", legacy()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    SaveLogic::apply(&mut pool, &dop(&[Friday]), jan15(), None, "alice", legacy()).unwrap_err();

    let week = pool.list_for_week(&WeekKey::from_raw("32024")).unwrap();
    assert_eq!(week.len(), 1);
}

#[test]
fn test_edit_does_not_conflict_with_itself() {
    let mut pool = mem_pool();
    let id = SaveLogic::apply(&mut pool, &dop(&[Monday, Tuesday]), jan15(), None, "alice", legacy())
        .unwrap()
        .id()
        .to_string();
    let entry = pool.find(&id).unwrap().unwrap();

    let outcome = SaveLogic::apply(
        &mut pool,
        &dop(&[Monday, Tuesday, Wednesday]),
        jan15(),
        Some(&entry),
        "alice",
        legacy(),
    )
    .expect("editing an entry keeps its own days available");
    assert_eq!(outcome, SaveOutcome::Updated(id.clone()));

    let updated = pool.find(&id).unwrap().unwrap();
    assert!(updated.days.wednesday);
    assert_eq!(updated.created_at, entry.created_at);
}

#[test]
fn test_update_keeps_owner() {
    let mut pool = mem_pool();
    let id = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy())
        .unwrap()
        .id()
        .to_string();
    let entry = pool.find(&id).unwrap().unwrap();

    SaveLogic::apply(&mut pool, &dop(&[Friday]), jan15(), Some(&entry), "bob", legacy()).unwrap();

    let after = pool.find(&id).unwrap().unwrap();
    assert_eq!(after.owner_id, "alice");
    assert!(after.days.friday && !after.days.monday);
}

#[test]
fn test_week_scope_ignores_owner_and_owner_scope_does_not() {
    let mut pool = mem_pool();
    SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy()).unwrap();

    let err = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "bob", legacy()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let per_owner = SaveOptions {
        scope: ConflictScope::Owner,
        ..legacy()
    };
    SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "bob", per_owner)
        .expect("another owner may book the same day");

    let err = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", per_owner).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn test_other_weeks_do_not_conflict() {
    let mut pool = mem_pool();
    SaveLogic::apply(&mut pool, &dop(&Weekday::ALL), jan15(), None, "alice", legacy()).unwrap();

    let next = NaiveDate::from_ymd_opt(2024, 1, 22).unwrap();
    SaveLogic::apply(&mut pool, &dop(&Weekday::ALL), next, None, "alice", legacy()).unwrap();

    assert_eq!(pool.list_for_week(&WeekKey::from_raw("42024")).unwrap().len(), 1);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let mut pool = mem_pool();
    let fields = rclics::core::validate::validate_entry(&dop(&[Monday]))
        .unwrap()
        .into_fields(WeekKey::from_raw("32024"));

    assert!(matches!(pool.update("nope", &fields), Err(AppError::NotFound(_))));
    assert!(matches!(pool.delete("nope"), Err(AppError::NotFound(_))));
    assert!(matches!(DeleteLogic::apply(&mut pool, "nope"), Err(AppError::NotFound(_))));
    assert!(pool.find("nope").unwrap().is_none());
}

#[test]
fn test_delete_removes_entry() {
    let mut pool = mem_pool();
    let id = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy())
        .unwrap()
        .id()
        .to_string();

    let removed = DeleteLogic::apply(&mut pool, &id).unwrap();
    assert_eq!(removed.id, id);
    assert!(pool.find(&id).unwrap().is_none());

    // the day is free again
    SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy()).unwrap();
}

#[test]
fn test_writes_are_audited() {
    let mut pool = mem_pool();
    let id = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy())
        .unwrap()
        .id()
        .to_string();
    DeleteLogic::apply(&mut pool, &id).unwrap();

    let ops: Vec<String> = {
        let mut stmt = pool
            .conn
            .prepare("SELECT operation FROM log WHERE target = ?1 ORDER BY id")
            .unwrap();
        stmt.query_map([&id], |r| r.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    };
    assert_eq!(ops, vec!["add".to_string(), "del".to_string()]);
}

#[test]
fn test_listing_keeps_insertion_order() {
    let mut pool = mem_pool();
    let a = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy()).unwrap();
    let b = SaveLogic::apply(&mut pool, &dop(&[Tuesday]), jan15(), None, "alice", legacy()).unwrap();
    let c = SaveLogic::apply(&mut pool, &dop(&[Friday]), jan15(), None, "alice", legacy()).unwrap();

    let ids: Vec<String> = pool
        .list_for_week(&WeekKey::from_raw("32024"))
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![a.id(), b.id(), c.id()]);
}

#[test]
fn test_pad_week_keys_rewrites_legacy_keys_once() {
    let mut pool = mem_pool();
    let id = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy())
        .unwrap()
        .id()
        .to_string();
    let wk40 = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
    SaveLogic::apply(&mut pool, &dop(&[Monday]), wk40, None, "alice", legacy()).unwrap();

    let rewritten = pad_week_keys(&mut pool.conn).unwrap();
    assert_eq!(rewritten, 1);
    assert!(is_migration_applied(&pool.conn, "20260301_0002_pad_week_keys").unwrap());

    assert_eq!(pool.find(&id).unwrap().unwrap().week.as_str(), "032024");
    assert!(pool.list_for_week(&WeekKey::from_raw("32024")).unwrap().is_empty());
    assert_eq!(pool.list_for_week(&WeekKey::from_raw("402024")).unwrap().len(), 1);

    assert_eq!(pad_week_keys(&mut pool.conn).unwrap(), 0);
}

#[test]
fn test_conflict_check_spans_both_key_layouts() {
    let mut pool = mem_pool();
    SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy()).unwrap();

    let err = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", padded()).unwrap_err();
    match err {
        AppError::Conflict { week, days } => {
            assert_eq!(week, "032024");
            assert_eq!(days, vec![Monday]);
        }
        other => panic!("expected a conflict, got {:?}", other),
    }

    // and the other way round
    SaveLogic::apply(&mut pool, &dop(&[Tuesday]), jan15(), None, "alice", padded()).unwrap();
    let err = SaveLogic::apply(&mut pool, &dop(&[Tuesday]), jan15(), None, "alice", legacy()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn test_editing_legacy_entry_sees_legacy_neighbours() {
    let mut pool = mem_pool();
    let id = SaveLogic::apply(&mut pool, &dop(&[Monday]), jan15(), None, "alice", legacy())
        .unwrap()
        .id()
        .to_string();
    SaveLogic::apply(&mut pool, &dop(&[Wednesday]), jan15(), None, "alice", legacy()).unwrap();
    let entry = pool.find(&id).unwrap().unwrap();

    let err = SaveLogic::apply(
        &mut pool,
        &dop(&[Monday, Wednesday]),
        jan15(),
        Some(&entry),
        "alice",
        padded(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // its own legacy row does not count against it
    SaveLogic::apply(&mut pool, &dop(&[Monday, Tuesday]), jan15(), Some(&entry), "alice", padded())
        .expect("own days stay available across layouts");
    assert_eq!(pool.find(&id).unwrap().unwrap().week.as_str(), "032024");
}

#[test]
fn test_week_listing_is_capped() {
    let mut pool = mem_pool();
    let key = WeekKey::from_raw("032024");
    let fields = rclics::core::validate::validate_entry(&dop(&[Monday]))
        .unwrap()
        .into_fields(key.clone());

    for _ in 0..RESULT_LIMIT + 5 {
        pool.create(fields.clone(), "alice").unwrap();
    }

    assert_eq!(pool.list_for_week(&key).unwrap().len(), RESULT_LIMIT);
}
