use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anything that can answer "are we online right now".
pub trait ConnectivityProbe: Send + Sync {
    fn is_online(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    NoConnection,
}

impl ConnectionStatus {
    pub fn from_online(online: bool) -> Self {
        if online {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::NoConnection
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Connected => write!(f, "Connected"),
            ConnectionStatus::NoConnection => write!(f, "No Connection"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            // public DNS resolver, reachable from almost anywhere
            host: "8.8.8.8".to_string(),
            port: 53,
            timeout: Duration::from_secs(3),
        }
    }
}

impl ConnectivityConfig {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }
}
