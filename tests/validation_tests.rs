use rclics::core::validate::validate_entry;
use rclics::describe;
use rclics::models::codes::{KNOWN_CODES, find_by_description};
use rclics::models::days::{WeekDays, Weekday};
use rclics::models::entry::EntryForm;
use rclics::models::validation::Field;
use rclics::models::week_key::WeekKey;

mod common;
use common::form;

#[test]
fn test_valid_form_is_accepted() {
    let f = form("16-041", "7901", "0001", &[Weekday::Monday]);
    let valid = validate_entry(&f).expect("valid form rejected");

    let fields = valid.into_fields(WeekKey::from_raw("032024"));
    assert_eq!(fields.ian, "16-041");
    assert_eq!(fields.week.as_str(), "032024");
    assert!(fields.days.monday);
}

#[test]
fn test_ian_shape_is_checked() {
    let err = validate_entry(&form("123-45", "7901", "0001", &[Weekday::Monday])).unwrap_err();
    assert!(err.has(Field::Ian));
    assert_eq!(err.errors().len(), 1);

    for bad in ["16041", "16-0411", " 16-041", "16-041 ", "aa-bbb", "1-0412"] {
        let err = validate_entry(&form(bad, "7901", "0001", &[Weekday::Friday])).unwrap_err();
        assert!(err.has(Field::Ian), "accepted ian {:?}", bad);
    }
}

#[test]
fn test_activity_and_object_need_four_digits() {
    let err = validate_entry(&form("16-041", "790", "00011", &[Weekday::Monday])).unwrap_err();
    assert!(err.has(Field::Activity));
    assert!(err.has(Field::Object));
    assert!(!err.has(Field::Ian));
}

#[test]
fn test_empty_fields_are_required() {
    let err = validate_entry(&form("", "", "", &[Weekday::Monday])).unwrap_err();
    assert_eq!(err.errors().len(), 3);
    assert!(err.errors().iter().all(|e| e.message == "This field is required"));
}

#[test]
fn test_at_least_one_day_is_required() {
    let none = EntryForm {
        ian: "16-041".into(),
        activity: "7901".into(),
        object: "0001".into(),
        days: WeekDays::none(),
    };
    let err = validate_entry(&none).unwrap_err();
    assert!(err.has(Field::Days));
    assert_eq!(err.errors().len(), 1);

    for day in Weekday::ALL {
        assert!(validate_entry(&form("16-041", "7901", "0001", &[day])).is_ok());
    }
}

#[test]
fn test_all_failures_are_reported_together() {
    let bad = EntryForm {
        ian: "x".into(),
        activity: "y".into(),
        object: "z".into(),
        days: WeekDays::none(),
    };
    let err = validate_entry(&bad).unwrap_err();
    let fields: Vec<Field> = err.errors().iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![Field::Ian, Field::Activity, Field::Object, Field::Days]
    );
    assert!(err.to_string().contains("days: Please select at least one day"));
}

#[test]
fn test_describe_known_and_unknown_codes() {
    assert_eq!(describe("04-001", "9007", "0007"), "Annual Leave");
    assert_eq!(describe("16-041", "7901", "0001"), "DOP");
    assert_eq!(describe("99-999", "0000", "0000"), "Unknown");
    // all three parts must match
    assert_eq!(describe("04-001", "9007", "0008"), "Unknown");
}

#[test]
fn test_quick_fill_from_known_code() {
    let code = find_by_description("sick leave").expect("known code");
    let mut f = EntryForm::default();
    f.apply_code(code);
    f.days.set(Weekday::Wednesday, true);

    assert_eq!((f.ian.as_str(), f.activity.as_str(), f.object.as_str()), ("04-001", "9008", "0008"));
    assert!(validate_entry(&f).is_ok());

    assert!(find_by_description("Coffee break").is_none());
    assert!(KNOWN_CODES.iter().all(|c| validate_entry(&EntryForm {
        ian: c.ian.into(),
        activity: c.activity.into(),
        object: c.object.into(),
        days: WeekDays::all(),
    })
    .is_ok()));
}

#[test]
fn test_all_days_flag_is_derived_from_the_five_days() {
    let mut days = WeekDays::none();
    assert!(!days.all_days());

    days.set_all(true);
    assert!(days.all_days());

    days.set(Weekday::Thursday, false);
    assert!(!days.all_days());
    assert_eq!(days.selected().len(), 4);

    days.set(Weekday::Thursday, true);
    assert!(days.all_days());

    days.set_all(false);
    assert!(!days.any());
}

#[test]
fn test_day_list_parsing() {
    let days = WeekDays::parse_list("mon, Wed,friday").unwrap();
    assert_eq!(
        days.selected(),
        vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
    );
    assert!(WeekDays::parse_list("mon,sat").is_err());
    assert!(WeekDays::parse_list("mo").is_err());
}
