//! Board support: the Wi-Fi station behind [`app_core::NetworkDriver`].
//!
//! On ESP-IDF targets this wraps `EspWifi`; everywhere else a simulated
//! station stands in so the firmware loop can run on a desktop.

use std::time::Duration;

use thiserror::Error;

mod imp;

pub use imp::Station;

#[cfg(not(target_os = "espidf"))]
pub use imp::SimulatedStation;

#[derive(Debug, Error)]
pub enum HardwareError {
    #[error("wifi error: {0}")]
    Wifi(&'static str),
    #[error("config error: {0}")]
    Config(&'static str),
    #[error("hardware error: {0}")]
    Other(&'static str),
}

/// Board bring-up options.
#[derive(Debug, Clone, Default)]
pub struct StationConfig {
    /// Host only: how long after `begin_connect` the simulated station
    /// associates. `None` never associates.
    pub simulated_connect_after: Option<Duration>,
}

/// Take the radio peripherals and return an idle station driver.
pub fn init_station(config: StationConfig) -> Result<Station, HardwareError> {
    imp::init_station(config)
}
