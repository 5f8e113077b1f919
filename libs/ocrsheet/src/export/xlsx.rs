use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use std::time::Instant;

use super::SpreadsheetWriter;
use crate::grid::Grid;

pub const XLSX_MAX_ROWS: usize = 1_048_576;
pub const XLSX_MAX_COLUMNS: usize = 16_384;
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Clone, Debug)]
pub struct XlsxWriter {
    sheet_name: String,
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

fn check_limits(grid: &Grid) -> Result<()> {
    if grid.num_rows() > XLSX_MAX_ROWS {
        anyhow::bail!("{} rows exceed the xlsx limit of {}", grid.num_rows(), XLSX_MAX_ROWS);
    }
    if grid.num_columns() > XLSX_MAX_COLUMNS {
        anyhow::bail!(
            "{} columns exceed the xlsx limit of {}",
            grid.num_columns(),
            XLSX_MAX_COLUMNS
        );
    }
    Ok(())
}

impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, grid: &Grid, path: &Path) -> Result<()> {
        check_limits(grid)?;

        let start = Instant::now();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.sheet_name)
            .with_context(|| format!("Invalid sheet name: {}", self.sheet_name))?;

        for (row_idx, row) in grid.rows().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                // padding cells stay blank
                if cell.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(row_idx as u32, col_idx as u16, cell)
                    .with_context(|| format!("Failed to write cell ({}, {})", row_idx, col_idx))?;
            }
        }

        workbook
            .save(path)
            .with_context(|| format!("Failed to save workbook to {}", path.display()))?;

        log::info!(
            "Wrote {}x{} grid to {} in {:?}",
            grid.num_rows(),
            grid.num_columns(),
            path.display(),
            start.elapsed()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use calamine::{open_workbook, Reader, Xlsx};
    use std::io::Read;
    use std::num::NonZeroUsize;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_xlsx_archive() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("table.xlsx");
        let grid = build_grid(["A", "B", "C"], NonZeroUsize::new(2).unwrap());

        XlsxWriter::default().write(&grid, &path)?;

        // xlsx is a zip container
        let mut magic = [0u8; 2];
        std::fs::File::open(&path)?.read_exact(&mut magic)?;
        assert_eq!(&magic, b"PK");
        Ok(())
    }

    #[test]
    fn test_written_sheet_holds_only_grid_cells() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("table.xlsx");
        let grid = build_grid(["A", "B", "C", "D", "E"], NonZeroUsize::new(2).unwrap());

        XlsxWriter::default().write(&grid, &path)?;

        let mut workbook: Xlsx<_> = open_workbook(&path)?;
        assert_eq!(workbook.sheet_names(), vec![DEFAULT_SHEET_NAME.to_string()]);
        let range = workbook.worksheet_range(DEFAULT_SHEET_NAME)?;

        // first data row at A1: no header row, no index column
        assert_eq!(range.start(), Some((0, 0)));
        assert_eq!(range.get_size(), (3, 2));
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        assert_eq!(rows, vec![vec!["A", "B"], vec!["C", "D"], vec!["E", ""]]);
        Ok(())
    }

    #[test]
    fn test_write_empty_grid() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("empty.xlsx");
        let grid = build_grid(Vec::<String>::new(), NonZeroUsize::new(3).unwrap());

        XlsxWriter::default().write(&grid, &path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_rejects_too_many_columns() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("wide.xlsx");
        let grid = build_grid(["x"], NonZeroUsize::new(XLSX_MAX_COLUMNS + 1).unwrap());

        let result = XlsxWriter::default().write(&grid, &path);
        assert!(result.is_err());
        assert!(!path.exists(), "nothing should be written when limits are exceeded");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("out.xlsx");
        let grid = build_grid(["x"], NonZeroUsize::new(1).unwrap());

        assert!(XlsxWriter::default().write(&grid, &path).is_err());
    }
}
