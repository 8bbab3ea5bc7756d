use crate::models::days::WeekDays;
use crate::models::entry::{EntryFields, EntryForm};
use crate::models::validation::{Field, ValidationErrors};
use crate::models::week_key::WeekKey;
use regex::Regex;
use std::sync::LazyLock;

static IAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{3}$").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Form input that passed [`validate_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    ian: String,
    activity: String,
    object: String,
    days: WeekDays,
}

impl ValidEntry {
    pub fn days(&self) -> &WeekDays {
        &self.days
    }

    /// Attach the week being edited.
    pub fn into_fields(self, week: WeekKey) -> EntryFields {
        EntryFields {
            week,
            ian: self.ian,
            activity: self.activity,
            object: self.object,
            days: self.days,
        }
    }
}

fn check_field(errors: &mut ValidationErrors, field: Field, value: &str, re: &Regex) {
    if value.is_empty() {
        errors.push(field, "This field is required");
    } else if !re.is_match(value) {
        errors.push(field, format!("Please provide a valid {}", field.name()));
    }
}

/// Check the raw form before anything is sent to the store.
/// All failing fields are reported together.
pub fn validate_entry(form: &EntryForm) -> Result<ValidEntry, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_field(&mut errors, Field::Ian, &form.ian, &IAN_RE);
    check_field(&mut errors, Field::Activity, &form.activity, &CODE_RE);
    check_field(&mut errors, Field::Object, &form.object, &CODE_RE);

    if !form.days.any() {
        errors.push(Field::Days, "Please select at least one day");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidEntry {
        ian: form.ian.clone(),
        activity: form.activity.clone(),
        object: form.object.clone(),
        days: form.days,
    })
}
