//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    /// Column whose width grows to fit its content.
    pub fn auto(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.chars().count(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(headers.iter().map(|h| Column::auto(h)).collect())
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
