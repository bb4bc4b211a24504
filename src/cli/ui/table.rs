use crate::cli::output::current_preferences;
use crate::core::renderer::{DisplayRow, TABLE_HEADERS};

/// Left-aligned text table; every column is as wide as its widest cell.
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn compute_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(header), usize::max)
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, self.padding)
            })
            .collect();
        cells.join("│").trim_end().to_string()
    }

    /// Renders the header, a separator and every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.headers, &widths));
        lines.push(horizontal_rule(&widths, self.padding));
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }

        let joined = lines.join("\n");
        if current_preferences().plain_mode {
            joined.replace('│', "|")
        } else {
            joined
        }
    }
}

/// Builds the student table for the given rows.
pub fn student_table(rows: &[DisplayRow]) -> Table {
    Table {
        headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: rows.iter().map(DisplayRow::cells).collect(),
        padding: 1,
    }
}

pub fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn render_cell(text: &str, width: usize, padding: usize) -> String {
    let fill = width.saturating_sub(visible_width(text));
    let pad = " ".repeat(padding);
    format!("{pad}{text}{}{pad}", " ".repeat(fill))
}

/// Builds a horizontal rule spanning the table, with junctions between columns.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let plain = current_preferences().plain_mode;
    let (line, junction) = if plain { ('-', "+") } else { ('─', "┼") };
    widths
        .iter()
        .map(|w| line.to_string().repeat(w + padding * 2))
        .collect::<Vec<_>>()
        .join(junction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_left_aligned_and_padded() {
        assert_eq!(render_cell("AB", 4, 1), " AB   ");
        assert_eq!(render_cell("ABCDE", 4, 0), "ABCDE");
    }

    #[test]
    fn widths_count_cyrillic_chars() {
        let table = Table {
            headers: vec!["ФИО".into(), "Факультет".into(), "Годы".into()],
            rows: vec![vec!["Петров Пётр".into(), "КСиК".into(), "2017-2021".into()]],
            padding: 1,
        };
        assert_eq!(table.compute_widths(), vec![11, 9, 9]);
    }
}
