use serde::Serialize;

/// Rectangular table of recognized fragments. Every row holds exactly
/// `num_columns` cells; padding cells are empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    num_columns: usize,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub(crate) fn from_padded_rows(num_columns: usize, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == num_columns));
        Self { num_columns, rows }
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}
