mod ocr;
pub use ocr::{
    fragments_from_recognitions, BoundingBox, OcrConfig, OcrEngine, OcrGranularity, OcrLanguage,
    Recognition, TesseractEngine,
};
