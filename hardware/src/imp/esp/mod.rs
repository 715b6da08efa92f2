use std::net::Ipv4Addr;

use super::super::{HardwareError, StationConfig};
use app_core::{NetworkDriver, NetworkError, WifiMode};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::EspWifi;
use log::{debug, info};

mod wifi;

use wifi::{map_driver_err, map_wifi_err, station_config, station_mode};

/// Wi-Fi station on ESP-IDF.
///
/// Every call returns immediately; association progress is read back from
/// the driver and the station netif.
pub struct EspStation {
    wifi: EspWifi<'static>,
}

pub fn init_station(config: StationConfig) -> Result<EspStation, HardwareError> {
    debug!("esp station init: {:?}", config);

    // Take all shared peripherals once and wire them into the handle.
    let peripherals = Peripherals::take().map_err(map_wifi_err)?;
    let sysloop = EspSystemEventLoop::take().map_err(map_wifi_err)?;
    let nvs = EspDefaultNvsPartition::take().map_err(map_wifi_err)?;

    let wifi = EspWifi::new(
        peripherals.modem,
        sysloop,
        Some(nvs)
    )
        .map_err(map_wifi_err)?;

    Ok(EspStation { wifi })
}

impl NetworkDriver for EspStation {
    fn set_mode(&mut self, mode: WifiMode) -> Result<(), NetworkError> {
        match mode {
            WifiMode::Station => station_mode(&mut self.wifi).map_err(map_driver_err)?,
        }

        if !self.wifi.is_started().map_err(map_driver_err)? {
            self.wifi.start().map_err(map_driver_err)?;
        }
        info!("Wi-Fi started in {:?} mode", mode);
        Ok(())
    }

    fn begin_connect(&mut self, ssid: &str, password: &str) -> Result<(), NetworkError> {
        if !self.wifi.is_started().map_err(map_driver_err)? {
            return Err(NetworkError::NotStarted);
        }

        let config = station_config(ssid, password)?;
        self.wifi.set_configuration(&config).map_err(map_driver_err)?;

        // esp_wifi_connect only kicks off association; completion shows up
        // as link-up plus a DHCP lease on the STA netif.
        self.wifi.connect().map_err(map_driver_err)
    }

    fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false) && self.local_address().is_some()
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        match self.wifi.sta_netif().get_ip_info() {
            Ok(info) if !info.ip.is_unspecified() => Some(info.ip),
            Ok(_) => None,
            Err(e) => {
                debug!("get_ip_info: {}", e);
                None
            }
        }
    }
}
