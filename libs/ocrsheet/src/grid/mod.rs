mod types;
pub use types::Grid;

mod utils;
pub use utils::build_grid;
