use std::num::NonZeroUsize;

use super::types::Grid;

/// Chunks `fragments` into rows of `num_columns`, in order, and pads the last
/// short row with empty strings.
pub fn build_grid<I, S>(fragments: I, num_columns: NonZeroUsize) -> Grid
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let num_columns = num_columns.get();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::with_capacity(num_columns);

    for fragment in fragments {
        row.push(fragment.into());
        if row.len() == num_columns {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(num_columns)));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    for row in rows.iter_mut() {
        row.resize(num_columns, String::new());
    }

    Grid::from_padded_rows(num_columns, rows)
}
