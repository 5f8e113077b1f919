use std::path::PathBuf;

use ocrsheet::export::XLSX_EXTENSION;
use ocrsheet::shell::{FileDialogs, Notifier};

pub struct NativeDialogs;

impl FileDialogs for NativeDialogs {
    fn pick_image(&self, extensions: &[&str]) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("Image files", extensions)
            .pick_file()
    }

    fn pick_save_location(&self, default_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_file_name(default_name)
            .add_filter("Excel files", &[XLSX_EXTENSION])
            .save_file()
    }
}

pub struct MessageBoxes;

impl MessageBoxes {
    fn show(level: rfd::MessageLevel, title: &str, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl Notifier for MessageBoxes {
    fn error(&self, title: &str, message: &str) {
        Self::show(rfd::MessageLevel::Error, title, message);
    }

    fn info(&self, title: &str, message: &str) {
        Self::show(rfd::MessageLevel::Info, title, message);
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}
