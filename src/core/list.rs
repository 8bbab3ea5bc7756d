use crate::models::days::Weekday;
use crate::models::entry::Entry;
use crate::utils::date::week_days;
use crate::utils::day_mark;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// The week table: one row per entry, one column per working day.
    pub fn week_table(week: NaiveDate, entries: &[Entry]) -> Table {
        let mut columns = vec![
            Column::new("ID"),
            Column::new("IAN"),
            Column::new("Activity"),
            Column::new("Object"),
            Column::new("Description"),
        ];
        for (day, date) in week_days(week) {
            columns.push(Column::new(&format!("{} {}", day.short(), date.format("%d"))));
        }

        let mut table = Table::new(columns);
        for e in entries {
            let mut row = vec![
                e.id.clone(),
                e.ian.clone(),
                e.activity.clone(),
                e.object.clone(),
                e.description().to_string(),
            ];
            row.extend(Weekday::ALL.iter().map(|d| day_mark(e.days.get(*d))));
            table.add_row(row);
        }

        table
    }

    /// Weekdays not claimed by any entry of the week.
    pub fn free_days(entries: &[Entry]) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| !entries.iter().any(|e| e.days.get(*d)))
            .collect()
    }
}
