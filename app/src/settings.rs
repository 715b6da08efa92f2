//! Compile-time configuration loaded via `toml-cfg`.

use std::time::Duration;

use app_core::{ConfigError, Credentials};
use hardware::StationConfig;

#[toml_cfg::toml_config]
pub struct Settings {
    #[default("test-ssid")]
    pub wifi_ssid: &'static str,
    #[default("test-pass")]
    pub wifi_password: &'static str,
    #[default(1500)]
    pub sim_connect_after_ms: u64,
    #[default(false)]
    pub sim_never_connect: bool,
}

impl Settings {
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        Credentials::new(self.wifi_ssid, self.wifi_password)
    }

    pub fn station_config(&self) -> StationConfig {
        let simulated_connect_after = if self.sim_never_connect {
            None
        } else {
            Some(Duration::from_millis(self.sim_connect_after_ms))
        };

        StationConfig {
            simulated_connect_after,
        }
    }
}
