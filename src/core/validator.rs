//! Field rules for the student form.
//!
//! Every rule runs on every call so the caller can mark all offending fields at
//! once. The birth date lower bound is exclusive while "today" is allowed; the start
//! year range is inclusive on both ends.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::{Candidate, Field, Record};

/// Earliest accepted start year.
pub const MIN_START_YEAR: i32 = 2000;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Birth dates must be strictly later than this.
pub fn birth_date_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Outcome of a single field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldStatus::Valid => None,
            FieldStatus::Invalid(message) => Some(message),
        }
    }
}

impl<T> From<Result<T, String>> for FieldStatus {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(_) => FieldStatus::Valid,
            Err(message) => FieldStatus::Invalid(message),
        }
    }
}

/// Per-field verdict for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    statuses: BTreeMap<Field, FieldStatus>,
}

impl ValidationReport {
    /// True iff every field passed.
    pub fn is_valid(&self) -> bool {
        self.statuses.values().all(FieldStatus::is_valid)
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        self.status(field).is_valid()
    }

    pub fn status(&self, field: Field) -> &FieldStatus {
        self.statuses.get(&field).unwrap_or(&FieldStatus::Valid)
    }

    /// Failing fields in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.statuses
            .iter()
            .filter(|(_, status)| !status.is_valid())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldStatus)> {
        self.statuses.iter().map(|(field, status)| (*field, status))
    }

    /// Comma separated labels of the failing fields.
    pub fn summary(&self) -> String {
        self.invalid_fields()
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Checks every field of `candidate` against the rules as of `today`.
pub fn validate(candidate: &Candidate, today: NaiveDate) -> ValidationReport {
    let statuses = Field::ALL
        .iter()
        .map(|field| (*field, check_field(*field, candidate.value(*field), today)))
        .collect();
    ValidationReport { statuses }
}

/// Validates `candidate` and, if it passes, builds a record from the trimmed and
/// parsed values.
pub fn build_record(candidate: &Candidate, today: NaiveDate) -> Result<Record, ValidationReport> {
    let parsed = (
        parse_text(&candidate.given_name),
        parse_text(&candidate.family_surname),
        parse_text(&candidate.patronymic),
        parse_birth_date(&candidate.birth_date, today),
        parse_start_year(&candidate.start_year, today),
        parse_text(&candidate.faculty),
    );
    match parsed {
        (Ok(given), Ok(surname), Ok(patronymic), Ok(birth), Ok(year), Ok(faculty)) => {
            Ok(Record::new(given, surname, patronymic, birth, year, faculty))
        }
        _ => Err(validate(candidate, today)),
    }
}

fn check_field(field: Field, raw: &str, today: NaiveDate) -> FieldStatus {
    match field {
        Field::BirthDate => parse_birth_date(raw, today).into(),
        Field::StartYear => parse_start_year(raw, today).into(),
        Field::FamilySurname | Field::GivenName | Field::Patronymic | Field::Faculty => {
            parse_text(raw).into()
        }
    }
}

fn parse_text(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("Value cannot be empty".into())
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| "Use YYYY-MM-DD format".to_string())?;
    let floor = birth_date_floor();
    if date <= floor {
        return Err(format!("Date must be after {floor}"));
    }
    if date > today {
        return Err("Date cannot be in the future".into());
    }
    Ok(date)
}

fn parse_start_year(raw: &str, today: NaiveDate) -> Result<i32, String> {
    let year = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| "Enter a whole number (e.g., 2019)".to_string())?;
    let current = today.year();
    if !(MIN_START_YEAR..=current).contains(&year) {
        return Err(format!(
            "Year must be between {MIN_START_YEAR} and {current}"
        ));
    }
    Ok(year)
}
