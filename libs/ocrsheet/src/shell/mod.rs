//! Form orchestration, independent of any GUI toolkit.
//!
//! The shell owns the job lifecycle: connectivity gate, input validation,
//! image pick, background recognition, save pick, write and close. Dialogs
//! and message boxes are reached through [`FileDialogs`] and [`Notifier`] so
//! the same flow runs under a native window or a test double.

mod types;
pub use types::{FileDialogs, Notifier, ShellEvent, ShellState, UploadOutcome};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::common::default_export_file_name;
use crate::connectivity::{ConnectionStatus, ConnectivityProbe};
use crate::export::{ensure_xlsx_extension, SpreadsheetWriter};
use crate::grid::Grid;
use crate::image2text::{OcrEngine, OcrLanguage};
use crate::job::{parse_column_count, spawn_job, JobError, JobHandle, JobParameters, JobPoll};
use crate::upload::IMAGE_EXTENSIONS;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Data saved to Excel successfully!";
pub const ERROR_TITLE: &str = "Error";
pub const OVERWRITE_TITLE: &str = "Confirm Save As";

/// Collaborators the shell drives.
pub struct ShellComponents {
    pub probe: Box<dyn ConnectivityProbe>,
    pub dialogs: Box<dyn FileDialogs>,
    pub notifier: Box<dyn Notifier>,
    pub engine: Arc<dyn OcrEngine>,
    pub writer: Box<dyn SpreadsheetWriter>,
}

pub struct Shell {
    components: ShellComponents,
    runtime: Handle,
    close_delay: Duration,
    state: ShellState,
    connection_status: ConnectionStatus,
    language: OcrLanguage,
    job: Option<JobHandle>,
}

impl Shell {
    /// Probes connectivity once so the form can show its status line.
    pub fn new(components: ShellComponents, runtime: Handle, close_delay: Duration) -> Self {
        let connection_status = ConnectionStatus::from_online(components.probe.is_online());
        log::info!("Internet status at startup: {}", connection_status);

        Self {
            components,
            runtime,
            close_delay,
            state: ShellState::AwaitingInput,
            connection_status,
            language: OcrLanguage::default(),
            job: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.connection_status
    }

    pub fn status_text(&self) -> String {
        format!("Internet Status: {}", self.connection_status)
    }

    pub fn language(&self) -> OcrLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: OcrLanguage) {
        if self.language != language {
            log::debug!("Language set to {} ({})", language.label(), language.code());
            self.language = language;
        }
    }

    /// Dropdown variant of [`Shell::set_language`]. Unknown labels are ignored.
    pub fn set_language_label(&mut self, label: &str) -> bool {
        match OcrLanguage::from_label(label) {
            Some(language) => {
                self.set_language(language);
                true
            }
            None => {
                log::warn!("Ignoring unknown language label: {}", label);
                false
            }
        }
    }

    /// A job is in flight; the upload control should be disabled.
    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn upload(&mut self, column_text: &str) -> UploadOutcome {
        if self.is_busy() {
            log::warn!("Upload ignored, a job is already running");
            return UploadOutcome::Busy;
        }

        // gate: no recognition attempt while offline
        let online = self.components.probe.is_online();
        self.connection_status = ConnectionStatus::from_online(online);
        if !online {
            return self.reject(JobError::Offline);
        }

        self.state = ShellState::Validating;
        let num_columns = match parse_column_count(column_text) {
            Ok(num_columns) => num_columns,
            Err(e) => return self.reject(e),
        };

        self.state = ShellState::PickingImage;
        let Some(image_path) = self.components.dialogs.pick_image(&IMAGE_EXTENSIONS) else {
            log::info!("Image selection cancelled");
            self.state = ShellState::AwaitingInput;
            return UploadOutcome::Cancelled;
        };

        let params = JobParameters::new(num_columns, self.language, image_path);
        log::info!("Starting job for {}", params.image_path.display());
        self.job = Some(spawn_job(&self.runtime, params, self.components.engine.clone()));
        self.state = ShellState::Recognizing;

        UploadOutcome::Started
    }

    pub fn cancel_job(&mut self) {
        if let Some(job) = &self.job {
            job.cancel();
        }
    }

    /// Collects a finished job and runs the save flow on the caller's thread.
    pub fn poll(&mut self) -> Option<ShellEvent> {
        let job = self.job.as_mut()?;
        let result = match job.try_poll() {
            JobPoll::Pending => return None,
            JobPoll::Finished(result) => result,
        };
        log::debug!("Job collected after {:?}", job.elapsed());
        self.job = None;

        let event = match result {
            Ok(grid) => self.save(grid),
            Err(e) => self.fail(e),
        };
        Some(event)
    }

    fn save(&mut self, grid: Grid) -> ShellEvent {
        self.state = ShellState::AwaitingSaveLocation;
        let default_name = default_export_file_name();
        let Some(path) = self.components.dialogs.pick_save_location(&default_name) else {
            log::info!("Save cancelled, nothing written");
            self.state = ShellState::AwaitingInput;
            return ShellEvent::SaveCancelled;
        };

        // the dialog only asked about overwriting the name without `.xlsx`
        let target: PathBuf = ensure_xlsx_extension(&path);
        if target != path && target.exists() {
            let message = format!("{} already exists.\nDo you want to replace it?", target.display());
            if !self.components.notifier.confirm(OVERWRITE_TITLE, &message) {
                log::info!("Kept existing {}, nothing written", target.display());
                self.state = ShellState::AwaitingInput;
                return ShellEvent::SaveCancelled;
            }
        }
        let path = target;

        self.state = ShellState::Writing;
        if let Err(e) = self.components.writer.write(&grid, &path) {
            return self.fail(JobError::export(&path, e));
        }

        self.components.notifier.info(SUCCESS_TITLE, SUCCESS_MESSAGE);
        self.state = ShellState::Done;
        ShellEvent::Saved {
            path,
            close_after: self.close_delay,
        }
    }

    fn reject(&mut self, error: JobError) -> UploadOutcome {
        log::warn!("Upload rejected: [{}] {}", error.code(), error);
        self.components.notifier.error(ERROR_TITLE, &error.to_string());
        self.state = ShellState::AwaitingInput;
        UploadOutcome::Rejected(error)
    }

    fn fail(&mut self, error: JobError) -> ShellEvent {
        self.state = ShellState::AwaitingInput;
        if !error.is_user_visible() {
            return ShellEvent::Cancelled;
        }

        log::error!("Job failed: [{}] {}", error.code(), error);
        self.components.notifier.error(ERROR_TITLE, &error.to_string());
        ShellEvent::Failed(error)
    }
}
