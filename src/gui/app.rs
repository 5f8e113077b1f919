use eframe::egui;
use std::time::{Duration, Instant};

use ocrsheet::image2text::OcrLanguage;
use ocrsheet::shell::{Shell, ShellEvent, UploadOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct OcrSheetApp {
    shell: Shell,
    column_input: String,
    language: OcrLanguage,
    close_at: Option<Instant>,
}

impl OcrSheetApp {
    pub fn new(shell: Shell) -> Self {
        let language = shell.language();
        Self {
            shell,
            column_input: String::new(),
            language,
            close_at: None,
        }
    }

    fn handle_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Saved { path, close_after } => {
                log::info!("Saved {}, closing in {:?}", path.display(), close_after);
                self.close_at = Some(Instant::now() + close_after);
            }
            ShellEvent::SaveCancelled | ShellEvent::Cancelled => {}
            ShellEvent::Failed(e) => log::debug!("Job failed with {}", e.code()),
        }
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(egui::RichText::new(self.shell.status_text()).size(12.0));

            ui.add_space(15.0);
            ui.heading(egui::RichText::new("OCR to Excel Converter").size(18.0).strong());

            ui.add_space(10.0);
            ui.label("Enter the number of columns in your data:");
            ui.add(
                egui::TextEdit::singleline(&mut self.column_input)
                    .hint_text("e.g., 3")
                    .desired_width(60.0),
            );

            ui.add_space(10.0);
            ui.label("Select the language of the image:");
            egui::ComboBox::from_id_source("language")
                .selected_text(self.language.label())
                .show_ui(ui, |ui| {
                    for language in OcrLanguage::ALL {
                        ui.selectable_value(&mut self.language, language, language.label());
                    }
                });
            self.shell.set_language(self.language);

            ui.add_space(20.0);
            let busy = self.shell.is_busy();
            let upload = egui::Button::new("Upload Photo")
                .min_size(egui::vec2(200.0, 28.0))
                .fill(egui::Color32::DARK_GREEN);
            if ui.add_enabled(!busy && self.close_at.is_none(), upload).clicked() {
                if let UploadOutcome::Started = self.shell.upload(&self.column_input) {
                    log::debug!("Upload started");
                }
            }

            if busy {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Recognizing text...");
                    if ui.button("Cancel").clicked() {
                        self.shell.cancel_job();
                    }
                });
            }
        });
    }
}

impl eframe::App for OcrSheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(event) = self.shell.poll() {
            self.handle_event(event);
        }

        if let Some(close_at) = self.close_at {
            let now = Instant::now();
            if now >= close_at {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                ctx.request_repaint_after(close_at - now);
            }
        }

        // keep polling the worker while nothing else triggers a repaint
        if self.shell.is_busy() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        egui::CentralPanel::default().show(ctx, |ui| self.form(ui));
    }
}
