//! Fixed configuration for the state machine.

use std::time::Duration;

use heapless::String;
use thiserror::Error;

/// Period of the state machine tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(5);
/// How long INIT waits for association before giving up.
pub const INIT_TIMEOUT: Duration = Duration::from_millis(15_000);

pub const MAX_SSID_LEN: usize = 32;
pub const MAX_PASSWORD_LEN: usize = 64;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SSID is empty")]
    EmptySsid,
    #[error("SSID too long")]
    SsidTooLong,
    #[error("password too long")]
    PasswordTooLong,
}

/// Network identifier and credential, bounded to what the radio accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    ssid: String<MAX_SSID_LEN>,
    password: String<MAX_PASSWORD_LEN>,
}

impl Credentials {
    pub fn new(ssid: &str, password: &str) -> Result<Self, ConfigError> {
        if ssid.is_empty() {
            return Err(ConfigError::EmptySsid);
        }

        let mut h_ssid = String::new();
        h_ssid
            .push_str(ssid)
            .map_err(|_| ConfigError::SsidTooLong)?;

        let mut h_password = String::new();
        h_password
            .push_str(password)
            .map_err(|_| ConfigError::PasswordTooLong)?;

        Ok(Self {
            ssid: h_ssid,
            password: h_password,
        })
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub credentials: Credentials,
    pub tick_interval: Duration,
    pub init_timeout: Duration,
}

impl MachineConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            tick_interval: TICK_INTERVAL,
            init_timeout: INIT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_radio_sized_credentials() {
        let ssid = "s".repeat(MAX_SSID_LEN);
        let pass = "p".repeat(MAX_PASSWORD_LEN);
        let creds = Credentials::new(&ssid, &pass).unwrap();
        assert_eq!(creds.ssid(), ssid);
        assert_eq!(creds.password(), pass);
    }

    #[test]
    fn rejects_oversized_or_empty_values() {
        let long_ssid = "s".repeat(MAX_SSID_LEN + 1);
        let long_pass = "p".repeat(MAX_PASSWORD_LEN + 1);
        assert_eq!(Credentials::new(&long_ssid, "x"), Err(ConfigError::SsidTooLong));
        assert_eq!(Credentials::new("net", &long_pass), Err(ConfigError::PasswordTooLong));
        assert_eq!(Credentials::new("", "x"), Err(ConfigError::EmptySsid));
    }

    #[test]
    fn open_network_has_empty_password() {
        let creds = Credentials::new("open-net", "").unwrap();
        assert_eq!(creds.password(), "");
    }

    #[test]
    fn defaults_match_firmware_timing() {
        let cfg = MachineConfig::new(Credentials::new("net", "pass").unwrap());
        assert_eq!(cfg.tick_interval, Duration::from_millis(5));
        assert_eq!(cfg.init_timeout, Duration::from_millis(15_000));
    }
}
