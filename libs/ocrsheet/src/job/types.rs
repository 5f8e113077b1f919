use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::error::JobError;
use crate::export::XLSX_MAX_COLUMNS;
use crate::image2text::OcrLanguage;

/// Everything a job needs, captured when the user clicks upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobParameters {
    pub num_columns: NonZeroUsize,
    pub language: OcrLanguage,
    pub image_path: PathBuf,
}

impl JobParameters {
    pub fn new(num_columns: NonZeroUsize, language: OcrLanguage, image_path: PathBuf) -> Self {
        Self {
            num_columns,
            language,
            image_path,
        }
    }
}

pub fn parse_column_count(input: &str) -> Result<NonZeroUsize, JobError> {
    let value: i64 = input.trim().parse().map_err(|_| JobError::InvalidColumnCount {
        input: input.to_string(),
    })?;

    if value <= 0 {
        return Err(JobError::NonPositiveColumnCount { value });
    }
    if value as u64 > XLSX_MAX_COLUMNS as u64 {
        return Err(JobError::TooManyColumns {
            value,
            max: XLSX_MAX_COLUMNS,
        });
    }

    NonZeroUsize::new(value as usize).ok_or(JobError::NonPositiveColumnCount { value })
}
