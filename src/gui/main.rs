use eframe::{egui, NativeOptions};
use std::sync::Arc;

use ocrsheet::config::AppConfig;
use ocrsheet::connectivity::TcpProbe;
use ocrsheet::export::XlsxWriter;
use ocrsheet::image2text::TesseractEngine;
use ocrsheet::logger::init_logger_exe;
use ocrsheet::shell::{Shell, ShellComponents};

mod app;
use app::OcrSheetApp;

mod dialogs;
use dialogs::{MessageBoxes, NativeDialogs};

fn main() -> Result<(), eframe::Error> {
    init_logger_exe();

    let config = AppConfig::default();
    log::debug!("Config: {:?}", config);

    // the window owns the main thread, jobs run on this runtime's blocking pool
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let components = ShellComponents {
        probe: Box::new(TcpProbe::new(config.connectivity.clone())),
        dialogs: Box::new(NativeDialogs),
        notifier: Box::new(MessageBoxes),
        engine: Arc::new(TesseractEngine::new(config.ocr.clone())),
        writer: Box::new(XlsxWriter::default()),
    };
    let shell = Shell::new(components, runtime.handle().clone(), config.close_delay);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 400.0])
            .with_title("OCR to Excel Converter"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "OCR to Excel Converter",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(OcrSheetApp::new(shell)))
        }),
    );

    log::info!("Exiting...");
    runtime.shutdown_timeout(std::time::Duration::from_nanos(0));
    result
}
