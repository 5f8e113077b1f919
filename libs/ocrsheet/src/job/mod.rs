mod error;
pub use error::JobError;

mod types;
pub use types::{parse_column_count, JobParameters};

mod utils;
pub use utils::run_job;

mod handle;
pub use handle::{spawn_job, JobHandle, JobPoll};
