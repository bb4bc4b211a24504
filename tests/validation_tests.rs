use chrono::{Datelike, Duration};
use roster_core::{
    core::{validate, Clock, SystemClock},
    domain::{Candidate, Field},
};

fn candidate_with(field: Field, value: &str) -> Candidate {
    let mut candidate = Candidate::new(
        "Иванов",
        "Иван",
        "Иванович",
        "2001-06-12",
        "2019",
        "ИСиП",
    );
    candidate.set(field, value);
    candidate
}

#[test]
fn start_year_bounds_follow_the_current_year() {
    let today = SystemClock.today();
    let current = today.year();

    let at_current = candidate_with(Field::StartYear, &current.to_string());
    assert!(validate(&at_current, today).is_valid());

    let next = candidate_with(Field::StartYear, &(current + 1).to_string());
    let report = validate(&next, today);
    assert!(!report.is_valid());
    assert_eq!(report.invalid_fields(), vec![Field::StartYear]);

    assert!(validate(&candidate_with(Field::StartYear, "2000"), today).is_valid());
    assert!(!validate(&candidate_with(Field::StartYear, "1999"), today).is_valid());
}

#[test]
fn birth_date_boundaries_are_asymmetric() {
    let today = SystemClock.today();
    let tomorrow = today + Duration::days(1);

    assert!(!validate(&candidate_with(Field::BirthDate, "1900-01-01"), today).is_valid());
    assert!(validate(&candidate_with(Field::BirthDate, "1900-01-02"), today).is_valid());
    let today_text = today.format("%Y-%m-%d").to_string();
    assert!(validate(&candidate_with(Field::BirthDate, &today_text), today).is_valid());
    let tomorrow_text = tomorrow.format("%Y-%m-%d").to_string();
    assert!(!validate(&candidate_with(Field::BirthDate, &tomorrow_text), today).is_valid());
}

#[test]
fn malformed_dates_are_invalid() {
    let today = SystemClock.today();
    for raw in ["", "12.06.2001", "2001-13-01", "2001-02-30", "yesterday"] {
        let report = validate(&candidate_with(Field::BirthDate, raw), today);
        assert!(!report.is_field_valid(Field::BirthDate), "`{raw}` accepted");
    }
}

#[test]
fn validation_is_repeatable() {
    let today = SystemClock.today();
    let candidate = candidate_with(Field::Faculty, " ");
    assert_eq!(validate(&candidate, today), validate(&candidate, today));
}
