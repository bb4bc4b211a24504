use std::fmt;

/// The six input fields of the student form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FamilySurname,
    GivenName,
    Patronymic,
    BirthDate,
    StartYear,
    Faculty,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FamilySurname,
        Field::GivenName,
        Field::Patronymic,
        Field::BirthDate,
        Field::StartYear,
        Field::Faculty,
    ];

    /// Form placeholder shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Field::FamilySurname => "Фамилия",
            Field::GivenName => "Имя",
            Field::Patronymic => "Отчество",
            Field::BirthDate => "Дата рождения",
            Field::StartYear => "Год начала обучения",
            Field::Faculty => "Факультет",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw, unvalidated form input exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub family_surname: String,
    pub given_name: String,
    pub patronymic: String,
    /// ISO-8601 date text (`YYYY-MM-DD`).
    pub birth_date: String,
    pub start_year: String,
    pub faculty: String,
}

impl Candidate {
    pub fn new(
        family_surname: impl Into<String>,
        given_name: impl Into<String>,
        patronymic: impl Into<String>,
        birth_date: impl Into<String>,
        start_year: impl Into<String>,
        faculty: impl Into<String>,
    ) -> Self {
        Self {
            family_surname: family_surname.into(),
            given_name: given_name.into(),
            patronymic: patronymic.into(),
            birth_date: birth_date.into(),
            start_year: start_year.into(),
            faculty: faculty.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FamilySurname => &self.family_surname,
            Field::GivenName => &self.given_name,
            Field::Patronymic => &self.patronymic,
            Field::BirthDate => &self.birth_date,
            Field::StartYear => &self.start_year,
            Field::Faculty => &self.faculty,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FamilySurname => self.family_surname = value,
            Field::GivenName => self.given_name = value,
            Field::Patronymic => self.patronymic = value,
            Field::BirthDate => self.birth_date = value,
            Field::StartYear => self.start_year = value,
            Field::Faculty => self.faculty = value,
        }
    }

    /// True when every field is empty, i.e. the form was just reset.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_value_address_the_same_field() {
        let mut candidate = Candidate::default();
        for (idx, field) in Field::ALL.iter().enumerate() {
            candidate.set(*field, format!("v{idx}"));
        }
        assert_eq!(candidate.value(Field::FamilySurname), "v0");
        assert_eq!(candidate.value(Field::StartYear), "v4");
        assert_eq!(candidate.faculty, "v5");
        assert!(!candidate.is_blank());
        assert!(Candidate::default().is_blank());
    }
}
