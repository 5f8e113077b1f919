use anyhow::Result;
use image::DynamicImage;
use rusty_tesseract::{Args, DataOutput, Image};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use super::types::{BoundingBox, OcrConfig, OcrGranularity, OcrLanguage, Recognition};
use super::OcrEngine;

// tesseract TSV level for a single word
const WORD_LEVEL: i32 = 5;

#[derive(Clone, Debug, Default)]
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image_path: &Path, language: OcrLanguage) -> Result<Vec<Recognition>> {
        let image = image::open(image_path)
            .map_err(|e| anyhow::anyhow!("Failed to load image from {}: {}", image_path.display(), e))?;
        perform_ocr_tesseract(&image, language, &self.config)
    }
}

pub fn perform_ocr_tesseract(
    image: &DynamicImage,
    language: OcrLanguage,
    config: &OcrConfig,
) -> Result<Vec<Recognition>> {
    let args = Args {
        lang: language.tesseract_code().to_string(),
        config_variables: HashMap::from([("tessedit_create_tsv".into(), "1".into())]),
        dpi: Some(config.dpi.unwrap_or(OcrConfig::get_default_dpi()) as i32),
        psm: Some(config.psm.unwrap_or(OcrConfig::get_default_psm()) as i32),
        oem: Some(config.oem.unwrap_or(OcrConfig::get_default_oem()) as i32),
    };

    log::debug!(
        "Running tesseract on {}x{} image, lang={}, psm={:?}, oem={:?}",
        image.width(),
        image.height(),
        args.lang,
        args.psm,
        args.oem
    );

    let ocr_image = Image::from_dynamic_image(image)
        .map_err(|e| anyhow::anyhow!("Failed to create tesseract image: {:?}", e))?;

    let start = Instant::now();
    let data_output = rusty_tesseract::image_to_data(&ocr_image, &args)
        .map_err(|e| anyhow::anyhow!("Tesseract failed: {:?}", e))?;
    log::info!(
        "Tesseract returned {} data entries in {:?}",
        data_output.data.len(),
        start.elapsed()
    );

    Ok(data_output_to_recognitions(&data_output, config.granularity))
}

/// One word-level TSV row, decoupled from the tesseract crate's own struct.
#[derive(Clone, Debug, PartialEq)]
struct TsvWord {
    line_key: (i32, i32, i32, i32),
    region: BoundingBox,
    confidence: f32,
    text: String,
}

fn data_output_to_recognitions(data_output: &DataOutput, granularity: OcrGranularity) -> Vec<Recognition> {
    let words = data_output
        .data
        .iter()
        .filter(|d| d.level == WORD_LEVEL)
        .map(|d| TsvWord {
            line_key: (d.page_num, d.block_num, d.par_num, d.line_num),
            region: BoundingBox::new(d.left, d.top, d.width, d.height),
            confidence: d.conf,
            text: d.text.clone(),
        })
        .collect::<Vec<_>>();

    words_to_recognitions(words, granularity)
}

fn words_to_recognitions(words: Vec<TsvWord>, granularity: OcrGranularity) -> Vec<Recognition> {
    let words = words.into_iter().filter(|w| !w.text.trim().is_empty());

    match granularity {
        OcrGranularity::Word => words
            .map(|w| Recognition::new(w.region, w.text.trim(), w.confidence))
            .collect(),
        OcrGranularity::Line => {
            let mut lines: Vec<(TsvWord, usize)> = Vec::new();
            for word in words {
                match lines.last_mut() {
                    Some((line, count)) if line.line_key == word.line_key => {
                        line.text.push(' ');
                        line.text.push_str(word.text.trim());
                        line.region = line.region.union(&word.region);
                        line.confidence += word.confidence;
                        *count += 1;
                    }
                    _ => {
                        let text = word.text.trim().to_string();
                        lines.push((TsvWord { text, ..word }, 1));
                    }
                }
            }

            lines
                .into_iter()
                .map(|(line, count)| Recognition::new(line.region, line.text, line.confidence / count as f32))
                .collect()
        }
    }
}
