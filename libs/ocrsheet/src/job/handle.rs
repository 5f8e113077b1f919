use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use super::error::JobError;
use super::types::JobParameters;
use super::utils::run_job;
use crate::grid::Grid;
use crate::image2text::OcrEngine;

pub type JobResult = Result<Grid, JobError>;

#[derive(Debug)]
pub enum JobPoll {
    Pending,
    Finished(JobResult),
}

/// The surface's grip on an in-flight job: its eventual result and a way to
/// ask it to stop.
#[derive(Debug)]
pub struct JobHandle {
    receiver: oneshot::Receiver<JobResult>,
    cancel: Arc<AtomicBool>,
    started: Instant,
}

impl JobHandle {
    pub fn cancel(&self) {
        log::info!("Cancellation requested");
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Non-blocking check, meant to be called once per UI frame.
    pub fn try_poll(&mut self) -> JobPoll {
        match self.receiver.try_recv() {
            Ok(result) => JobPoll::Finished(result),
            Err(TryRecvError::Empty) => JobPoll::Pending,
            Err(TryRecvError::Closed) => JobPoll::Finished(Err(JobError::WorkerFailed {
                reason: "worker exited without a result".to_string(),
            })),
        }
    }

    pub async fn wait(self) -> JobResult {
        self.receiver.await.unwrap_or_else(|_| {
            Err(JobError::WorkerFailed {
                reason: "worker exited without a result".to_string(),
            })
        })
    }
}

/// Runs one job on the runtime's blocking pool.
pub fn spawn_job(runtime: &Handle, params: JobParameters, engine: Arc<dyn OcrEngine>) -> JobHandle {
    let (tx, rx) = oneshot::channel();
    let cancel = Arc::new(AtomicBool::new(false));

    runtime.spawn_blocking({
        let cancel = cancel.clone();
        move || {
            let start = Instant::now();
            let result = run_job(&params, engine.as_ref(), &cancel);
            match &result {
                Ok(grid) => log::info!("Job finished in {:?}: {} rows", start.elapsed(), grid.num_rows()),
                Err(e) => log::warn!("Job ended after {:?}: [{}] {}", start.elapsed(), e.code(), e),
            }

            if tx.send(result).is_err() {
                log::warn!("Job result dropped, the surface is gone");
            }
        }
    });

    JobHandle {
        receiver: rx,
        cancel,
        started: Instant::now(),
    }
}
