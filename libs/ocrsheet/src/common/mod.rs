mod utils;

pub use utils::get_current_timestamp_str;
pub use utils::get_export_timestamp_str;
pub use utils::default_export_file_name;
pub use utils::EXPORT_FILE_PREFIX;
