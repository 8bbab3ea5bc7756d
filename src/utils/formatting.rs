//! Formatting utilities used for CLI and export outputs.

/// Cell content for a day flag in the week table.
pub fn day_mark(flag: bool) -> String {
    if flag { "✔".into() } else { String::new() }
}

/// "mon,tue" style summary of the flagged days, "-" when none.
pub fn days_summary(days: &crate::models::days::WeekDays) -> String {
    let selected = days.selected();
    if selected.is_empty() {
        return "-".into();
    }
    selected
        .iter()
        .map(|d| d.short().to_lowercase())
        .collect::<Vec<_>>()
        .join(",")
}
