use std::path::PathBuf;
use std::time::Duration;

use crate::job::JobError;

/// Native open/save pickers. `None` means the user dismissed the dialog.
pub trait FileDialogs {
    fn pick_image(&self, extensions: &[&str]) -> Option<PathBuf>;
    fn pick_save_location(&self, default_name: &str) -> Option<PathBuf>;
}

/// Modal message boxes.
pub trait Notifier {
    fn error(&self, title: &str, message: &str);
    fn info(&self, title: &str, message: &str);
    /// Yes/no question. `false` when the user declines or closes the box.
    fn confirm(&self, title: &str, message: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellState {
    AwaitingInput,
    Validating,
    PickingImage,
    Recognizing,
    AwaitingSaveLocation,
    Writing,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Started,
    Busy,
    Cancelled,
    Rejected(JobError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    Saved { path: PathBuf, close_after: Duration },
    SaveCancelled,
    Cancelled,
    Failed(JobError),
}
