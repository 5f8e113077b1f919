use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::connectivity::ConnectivityConfig;
use crate::image2text::OcrConfig;

/// Runtime settings. Built from defaults on every launch, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub connectivity: ConnectivityConfig,
    pub ocr: OcrConfig,
    /// Pause between the success message and closing the window.
    pub close_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            connectivity: ConnectivityConfig::default(),
            ocr: OcrConfig::default(),
            close_delay: Duration::from_millis(100),
        }
    }
}
