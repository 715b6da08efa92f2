use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiMode {
    Station,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("driver error: {0}")]
    Driver(&'static str),
    #[error("driver not started")]
    NotStarted,
}

/// Wireless association driver consumed by the state machine.
///
/// `begin_connect` only starts the attempt; progress is observed by polling
/// `is_connected`. The state machine never cancels an attempt.
pub trait NetworkDriver {
    fn set_mode(&mut self, mode: WifiMode) -> Result<(), NetworkError>;
    fn begin_connect(&mut self, ssid: &str, password: &str) -> Result<(), NetworkError>;
    fn is_connected(&self) -> bool;
    fn local_address(&self) -> Option<Ipv4Addr>;
}

impl<T: NetworkDriver + ?Sized> NetworkDriver for &mut T {
    fn set_mode(&mut self, mode: WifiMode) -> Result<(), NetworkError> {
        (**self).set_mode(mode)
    }

    fn begin_connect(&mut self, ssid: &str, password: &str) -> Result<(), NetworkError> {
        (**self).begin_connect(ssid, password)
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        (**self).local_address()
    }
}
