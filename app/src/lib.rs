use std::thread;
use std::time::Duration;

use app_core::{ConfigError, MachineConfig, NetworkError, Runtime, TickerError};
use hardware::{HardwareError, Station};
use log::info;
use thiserror::Error;

use crate::settings::SETTINGS;

mod settings;
mod version;

/// Pause between loop passes so the idle task (and its watchdog) gets to run.
const LOOP_YIELD: Duration = Duration::from_millis(1);

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("hardware error: {0}")]
    Hardware(#[from] HardwareError),
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("scheduler error: {0}")]
    Ticker(#[from] TickerError),
}

pub fn run() -> Result<(), AppError> {
    version::log_banner();

    let mut runtime = setup()?;

    loop {
        runtime.service();
        thread::sleep(LOOP_YIELD);
    }
}

/// Bring up the station, register the state machine tick and enter INIT.
pub fn setup() -> Result<Runtime<Station>, AppError> {
    let credentials = SETTINGS.credentials()?;
    let station = hardware::init_station(SETTINGS.station_config())?;

    let mut runtime = Runtime::new(station, MachineConfig::new(credentials))?;
    runtime.start()?;

    info!("setup complete");
    Ok(runtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::State;

    #[test]
    fn setup_enters_init_with_compiled_settings() {
        let runtime = setup().unwrap();
        let machine = runtime.machine();
        assert_eq!(machine.state(), State::Init);
        assert!(machine.is_first_entry());
        assert_eq!(machine.config().credentials.ssid(), SETTINGS.wifi_ssid);
    }
}
