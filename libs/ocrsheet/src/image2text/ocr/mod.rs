// OCR module structure
mod ocr_tesseract;
pub use ocr_tesseract::TesseractEngine;

mod types;
pub use types::{BoundingBox, OcrConfig, OcrGranularity, OcrLanguage, Recognition};

use anyhow::Result;
use std::path::Path;

/// A recognizer that turns an image file into text regions, in reading order.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image_path: &Path, language: OcrLanguage) -> Result<Vec<Recognition>>;
}

/// Only the text survives, in the order the engine returned it.
pub fn fragments_from_recognitions(recognitions: &[Recognition]) -> Vec<String> {
    recognitions.iter().map(|r| r.text.clone()).collect()
}
