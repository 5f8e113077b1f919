use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::error::JobError;
use super::types::JobParameters;
use crate::grid::{build_grid, Grid};
use crate::image2text::{fragments_from_recognitions, OcrEngine};

/// Recognize the image and reshape the fragments into a grid.
///
/// `cancel` is checked on both sides of the engine call; a result that
/// arrives after cancellation is discarded.
pub fn run_job(params: &JobParameters, engine: &dyn OcrEngine, cancel: &AtomicBool) -> Result<Grid, JobError> {
    if cancel.load(Ordering::SeqCst) {
        return Err(JobError::Cancelled);
    }

    log::info!(
        "Recognizing {} ({}, {} columns)",
        params.image_path.display(),
        params.language.code(),
        params.num_columns
    );

    let ocr_start = Instant::now();
    let recognitions = engine
        .recognize(&params.image_path, params.language)
        .map_err(JobError::recognition)?;
    log::info!("OCR took {:?}, {} fragments", ocr_start.elapsed(), recognitions.len());

    if cancel.load(Ordering::SeqCst) {
        log::debug!("Job cancelled during recognition, dropping result");
        return Err(JobError::Cancelled);
    }

    let fragments = fragments_from_recognitions(&recognitions);
    let grid = build_grid(fragments, params.num_columns);
    log::debug!("Built grid with {} rows", grid.num_rows());

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image2text::{BoundingBox, OcrLanguage, Recognition};
    use anyhow::Result;
    use std::num::NonZeroUsize;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::AtomicUsize;

    struct FakeEngine {
        texts: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl OcrEngine for FakeEngine {
        fn recognize(&self, _image_path: &Path, _language: OcrLanguage) -> Result<Vec<Recognition>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .texts
                .iter()
                .map(|t| Recognition::new(BoundingBox::default(), *t, 99.0))
                .collect())
        }
    }

    struct FailingEngine;

    impl OcrEngine for FailingEngine {
        fn recognize(&self, _image_path: &Path, _language: OcrLanguage) -> Result<Vec<Recognition>> {
            anyhow::bail!("engine exploded")
        }
    }

    fn params(columns: usize) -> JobParameters {
        JobParameters::new(
            NonZeroUsize::new(columns).unwrap(),
            OcrLanguage::English,
            PathBuf::from("table.png"),
        )
    }

    #[test]
    fn test_run_job_builds_grid_from_engine_text() {
        let engine = FakeEngine {
            texts: vec!["A", "B", "C", "D", "E"],
            calls: AtomicUsize::new(0),
        };

        let grid = run_job(&params(2), &engine, &AtomicBool::new(false)).unwrap();
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.cell(2, 0), Some("E"));
        assert_eq!(grid.cell(2, 1), Some(""));
    }

    #[test]
    fn test_run_job_cancelled_before_engine() {
        let engine = FakeEngine {
            texts: vec!["A"],
            calls: AtomicUsize::new(0),
        };

        let result = run_job(&params(1), &engine, &AtomicBool::new(true));
        assert_eq!(result, Err(JobError::Cancelled));
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_run_job_maps_engine_failure() {
        let result = run_job(&params(1), &FailingEngine, &AtomicBool::new(false));
        match result {
            Err(JobError::Recognition { reason }) => assert!(reason.contains("engine exploded")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
