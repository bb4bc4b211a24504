//! Pure date derivations shown in the student table.

use chrono::{Datelike, NaiveDate};

/// Every study programme is assumed to last this many years.
pub const STUDY_DURATION_YEARS: i32 = 4;

const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Whole years elapsed between `birth` and `reference`.
///
/// A year only counts once its anniversary (month and day) has been reached in the
/// reference year. Birth dates after `reference` are not clamped and yield zero or a
/// negative number.
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// First and last calendar year of study for a programme starting in `start_year`.
///
/// Stored records are not re-validated, so the end year saturates instead of overflowing.
pub fn study_span(start_year: i32) -> (i32, i32) {
    (start_year, start_year.saturating_add(STUDY_DURATION_YEARS))
}

/// ru-RU short date, e.g. `12.06.2001`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
