use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One captured student. Field names on the wire match the stored `students` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "name")]
    pub given_name: String,
    #[serde(rename = "surname")]
    pub family_surname: String,
    #[serde(rename = "lastname")]
    pub patronymic: String,
    #[serde(rename = "birth")]
    pub birth_date: NaiveDate,
    #[serde(rename = "startYear")]
    pub start_year: i32,
    pub faculty: String,
}

impl Record {
    pub fn new(
        given_name: impl Into<String>,
        family_surname: impl Into<String>,
        patronymic: impl Into<String>,
        birth_date: NaiveDate,
        start_year: i32,
        faculty: impl Into<String>,
    ) -> Self {
        Self {
            given_name: given_name.into(),
            family_surname: family_surname.into(),
            patronymic: patronymic.into(),
            birth_date,
            start_year,
            faculty: faculty.into(),
        }
    }

    /// Surname, given name and patronymic separated by single spaces.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.family_surname, self.given_name, self.patronymic
        )
    }
}

/// Ordered, append-only list of records. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The collection used on first run, before anything was persisted.
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }

    /// Returns the next version of the collection with `record` at the end.
    pub fn with_appended(&self, record: Record) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend(self.records.iter().cloned());
        records.push(record);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl From<Vec<Record>> for RecordCollection {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The two default students shown when no prior state exists.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(
            "Иван",
            "Иванов",
            "Иванович",
            NaiveDate::from_ymd_opt(2001, 6, 12).unwrap_or_default(),
            2019,
            "ИСиП",
        ),
        Record::new(
            "Пётр",
            "Петров",
            "Петрович",
            NaiveDate::from_ymd_opt(2002, 9, 11).unwrap_or_default(),
            2017,
            "КСиК",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_match_first_run_defaults() {
        let seeds = RecordCollection::seeded();
        assert_eq!(seeds.len(), 2);
        let ivan = seeds.get(0).unwrap();
        assert_eq!(ivan.full_name(), "Иванов Иван Иванович");
        assert_eq!(ivan.birth_date, NaiveDate::from_ymd_opt(2001, 6, 12).unwrap());
        assert_eq!(ivan.start_year, 2019);
        let petr = seeds.get(1).unwrap();
        assert_eq!(petr.full_name(), "Петров Пётр Петрович");
        assert_eq!(petr.faculty, "КСиК");
    }

    #[test]
    fn with_appended_leaves_original_untouched() {
        let base = RecordCollection::seeded();
        let extra = Record::new(
            "Анна",
            "Смирнова",
            "Олеговна",
            NaiveDate::from_ymd_opt(2003, 1, 5).unwrap(),
            2021,
            "ИСиП",
        );
        let next = base.with_appended(extra.clone());
        assert_eq!(base.len(), 2);
        assert_eq!(next.len(), 3);
        assert_eq!(next.last(), Some(&extra));
        assert_eq!(&next.as_slice()[..2], base.as_slice());
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let json = serde_json::to_value(RecordCollection::seeded()).unwrap();
        let first = &json[0];
        assert_eq!(first["name"], "Иван");
        assert_eq!(first["surname"], "Иванов");
        assert_eq!(first["lastname"], "Иванович");
        assert_eq!(first["birth"], "2001-06-12");
        assert_eq!(first["startYear"], 2019);
        assert_eq!(first["faculty"], "ИСиП");
    }
}
