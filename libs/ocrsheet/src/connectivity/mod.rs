mod types;
pub use types::{ConnectionStatus, ConnectivityConfig, ConnectivityProbe};

mod utils;
pub use utils::{is_online, TcpProbe};
