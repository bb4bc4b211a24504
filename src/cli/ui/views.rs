//! Text renderings of the two widget views.

use colored::Colorize;

use crate::core::renderer::DisplayRow;
use crate::core::validator::ValidationReport;
use crate::domain::{Candidate, Field};

use super::table::student_table;

pub const APP_TITLE: &str = "Список студентов";
pub const ADD_BUTTON: &str = "Добавить студента";

/// Form view: one line per field with the current buffer value. Fields failing the
/// last submit are shown in red with the reason.
pub fn entry_view(input: &Candidate, report: Option<&ValidationReport>) -> String {
    let label_width = Field::ALL
        .iter()
        .map(|field| field.label().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let value = input.value(field);
        let padding = " ".repeat(label_width - field.label().chars().count());
        let line = format!("{}{padding} : {value}", field.label());
        let failure = report.and_then(|report| report.status(field).message());
        lines.push(match failure {
            Some(reason) => format!("{}  ({reason})", line).red().to_string(),
            None => line,
        });
    }
    lines.join("\n")
}

/// Table view, or a short notice when there is nothing to show.
pub fn listing_view(rows: &[DisplayRow]) -> String {
    if rows.is_empty() {
        return "(студентов пока нет)".to_string();
    }
    student_table(rows).render()
}
