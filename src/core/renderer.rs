//! Projection of stored records into table rows.

use chrono::NaiveDate;

use crate::core::date_math::{age_in_years, format_date, study_span};
use crate::domain::{Record, RecordCollection};

/// Column headers of the student table, in column order.
pub const TABLE_HEADERS: [&str; 4] = [
    "ФИО",
    "Факультет",
    "Дата рождения и возраст",
    "Годы обучения",
];

/// Presentation-ready view of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub full_name: String,
    pub faculty_text: String,
    pub birth_text: String,
    pub span_text: String,
}

impl DisplayRow {
    pub fn from_record(record: &Record, today: NaiveDate) -> Self {
        let age = age_in_years(record.birth_date, today);
        let (start, end) = study_span(record.start_year);
        Self {
            full_name: record.full_name(),
            faculty_text: record.faculty.clone(),
            birth_text: format!("{} ({} лет)", format_date(record.birth_date), age),
            span_text: format!("{start}-{end}"),
        }
    }

    /// Cell texts in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.faculty_text.clone(),
            self.birth_text.clone(),
            self.span_text.clone(),
        ]
    }
}

/// Maps every record to a row, preserving insertion order. Ages are computed as of `today`.
pub fn project(collection: &RecordCollection, today: NaiveDate) -> Vec<DisplayRow> {
    collection
        .iter()
        .map(|record| DisplayRow::from_record(record, today))
        .collect()
}
