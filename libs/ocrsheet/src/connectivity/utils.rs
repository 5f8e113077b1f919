use std::net::{TcpStream, ToSocketAddrs};
use std::time::Instant;

use super::types::{ConnectivityConfig, ConnectivityProbe};

/// Single connection attempt bounded by `config.timeout`. No retries.
pub fn is_online(config: &ConnectivityConfig) -> bool {
    let start = Instant::now();

    let addrs = match (config.host.as_str(), config.port).to_socket_addrs() {
        Ok(addrs) => addrs.collect::<Vec<_>>(),
        Err(e) => {
            log::warn!("Failed to resolve {}:{}: {}", config.host, config.port, e);
            return false;
        }
    };

    let Some(addr) = addrs.first() else {
        log::warn!("No address found for {}:{}", config.host, config.port);
        return false;
    };

    match TcpStream::connect_timeout(addr, config.timeout) {
        Ok(_) => {
            log::debug!("Connectivity probe to {} succeeded in {:?}", addr, start.elapsed());
            true
        }
        Err(e) => {
            log::warn!("Connectivity probe to {} failed after {:?}: {}", addr, start.elapsed(), e);
            false
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TcpProbe {
    config: ConnectivityConfig,
}

impl TcpProbe {
    pub fn new(config: ConnectivityConfig) -> Self {
        Self { config }
    }
}

impl ConnectivityProbe for TcpProbe {
    fn is_online(&self) -> bool {
        is_online(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ConnectionStatus;
    use std::net::TcpListener;
    use std::time::Duration;

    #[test]
    fn test_is_online_with_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let config = ConnectivityConfig::new("127.0.0.1", port, Duration::from_millis(500));
        assert!(is_online(&config));
        assert!(TcpProbe::new(config).is_online());
    }

    #[test]
    fn test_is_online_refused() {
        // bind then drop so the port is (almost certainly) closed
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let config = ConnectivityConfig::new("127.0.0.1", port, Duration::from_millis(500));
        assert!(!is_online(&config));
    }

    #[test]
    fn test_is_online_unresolvable_host() {
        let config = ConnectivityConfig::new("host.invalid", 53, Duration::from_millis(200));
        assert!(!is_online(&config));
    }

    #[test]
    fn test_connection_status_display() {
        assert_eq!(ConnectionStatus::from_online(true).to_string(), "Connected");
        assert_eq!(ConnectionStatus::from_online(false).to_string(), "No Connection");
    }
}
