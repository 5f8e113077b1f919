use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OcrLanguage {
    #[default]
    English,
    Arabic,
}

impl OcrLanguage {
    pub const ALL: [OcrLanguage; 2] = [OcrLanguage::English, OcrLanguage::Arabic];

    /// Label shown in the language dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            OcrLanguage::English => "English",
            OcrLanguage::Arabic => "Arabic",
        }
    }

    /// Internal language code handed to the OCR engine.
    pub fn code(&self) -> &'static str {
        match self {
            OcrLanguage::English => "en",
            OcrLanguage::Arabic => "ar",
        }
    }

    /// Tesseract traineddata name.
    pub fn tesseract_code(&self) -> &'static str {
        match self {
            OcrLanguage::English => "eng",
            OcrLanguage::Arabic => "ara",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.label() == label)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl std::fmt::Display for OcrLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OcrLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_code(&s.to_lowercase())
            .or_else(|| Self::ALL.into_iter().find(|lang| lang.label().eq_ignore_ascii_case(s)))
            .ok_or_else(|| anyhow::anyhow!("Unsupported language: {}", s))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OcrGranularity {
    Word,
    /// One fragment per text line, so multi-word cells stay together.
    #[default]
    Line,
}

impl std::fmt::Display for OcrGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OcrGranularity::Word => write!(f, "word"),
            OcrGranularity::Line => write!(f, "line"),
        }
    }
}

impl From<&str> for OcrGranularity {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "word" => OcrGranularity::Word,
            _ => OcrGranularity::Line,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = (self.left + self.width).max(other.left + other.width);
        let bottom = (self.top + self.height).max(other.top + other.height);
        BoundingBox::new(left, top, right - left, bottom - top)
    }
}

/// One recognized region: where it is, what it says, how sure the engine is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub region: BoundingBox,
    pub text: String,
    pub confidence: f32,
}

impl Recognition {
    pub fn new(region: BoundingBox, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            region,
            text: text.into(),
            confidence,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OcrConfig {
    pub granularity: OcrGranularity,
    pub dpi: Option<u32>, // dots per inch
    pub psm: Option<u32>, // Page segmentation mode
    pub oem: Option<u32>, // OCR Engine Mode
}

impl OcrConfig {
    pub fn new(granularity: OcrGranularity, dpi: Option<u32>, psm: Option<u32>, oem: Option<u32>) -> Self {
        Self {
            granularity,
            dpi,
            psm,
            oem,
        }
    }

    pub fn get_default_dpi() -> u32 {
        300
    }

    // sparse text: table cells are scattered blocks, not running paragraphs
    pub fn get_default_psm() -> u32 {
        11
    }

    pub fn get_default_oem() -> u32 {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_label_and_code_mapping() {
        assert_eq!(OcrLanguage::from_label("English"), Some(OcrLanguage::English));
        assert_eq!(OcrLanguage::from_label("Arabic"), Some(OcrLanguage::Arabic));
        assert_eq!(OcrLanguage::from_label("French"), None);

        assert_eq!(OcrLanguage::English.code(), "en");
        assert_eq!(OcrLanguage::Arabic.code(), "ar");
        assert_eq!(OcrLanguage::from_code("ar"), Some(OcrLanguage::Arabic));
    }

    #[test]
    fn test_language_from_str_accepts_code_or_label() {
        assert_eq!("en".parse::<OcrLanguage>().unwrap(), OcrLanguage::English);
        assert_eq!("Arabic".parse::<OcrLanguage>().unwrap(), OcrLanguage::Arabic);
        assert_eq!(" AR ".parse::<OcrLanguage>().unwrap(), OcrLanguage::Arabic);
        assert!("de".parse::<OcrLanguage>().is_err());
    }

    #[test]
    fn test_granularity_defaults_to_line() {
        assert_eq!(OcrGranularity::default(), OcrGranularity::Line);
        assert_eq!(OcrConfig::default().granularity, OcrGranularity::Line);
        assert_eq!(OcrGranularity::from("WORD"), OcrGranularity::Word);
        assert_eq!(OcrGranularity::from("line"), OcrGranularity::Line);
        assert_eq!(OcrGranularity::from("paragraph"), OcrGranularity::Line);
    }

    #[test]
    fn test_bounding_box_union() {
        let a = BoundingBox::new(10, 10, 20, 5);
        let b = BoundingBox::new(40, 8, 10, 10);
        assert_eq!(a.union(&b), BoundingBox::new(10, 8, 40, 10));
    }
}
