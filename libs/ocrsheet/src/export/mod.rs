use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::grid::Grid;

mod xlsx;
pub use xlsx::{XlsxWriter, DEFAULT_SHEET_NAME, XLSX_MAX_COLUMNS, XLSX_MAX_ROWS};

pub const XLSX_EXTENSION: &str = "xlsx";

/// Writes a grid as plain data rows: no index column, no header row.
pub trait SpreadsheetWriter: Send + Sync {
    fn write(&self, grid: &Grid, path: &Path) -> Result<()>;
}

/// Appends `.xlsx` unless the path already carries it (any case).
pub fn ensure_xlsx_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XLSX_EXTENSION));

    if has_extension {
        path.to_path_buf()
    } else {
        let mut file_name = path.as_os_str().to_os_string();
        file_name.push(".");
        file_name.push(XLSX_EXTENSION);
        PathBuf::from(file_name)
    }
}
