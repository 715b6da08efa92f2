use crate::HardwareError;
use app_core::NetworkError;
use heapless::String;
use esp_idf_hal::sys::EspError;
use esp_idf_svc::wifi::{AuthMethod, ClientConfiguration, Configuration, EspWifi};

pub fn map_wifi_err(err: EspError) -> HardwareError {
    // We log the detailed error; the enum just carries a coarse category.
    log::error!("Wi-Fi error: {:?}", err);
    HardwareError::Wifi("Wi-Fi error")
}

pub fn map_driver_err(err: EspError) -> NetworkError {
    log::error!("Wi-Fi driver error: {:?}", err);
    NetworkError::Driver("Wi-Fi driver error")
}

/// Client configuration with no network selected; puts the radio in STA mode.
pub fn station_mode(wifi: &mut EspWifi) -> Result<(), EspError> {
    wifi.set_configuration(&Configuration::Client(ClientConfiguration::default()))
}

pub fn station_config(ssid: &str, pass: &str) -> Result<Configuration, NetworkError> {
    let mut h_ssid = String::<32>::new();
    h_ssid.push_str(ssid)
        .map_err(|_| NetworkError::Driver("SSID too long"))?;

    let mut password = String::<64>::new();
    password.push_str(pass)
        .map_err(|_| NetworkError::Driver("Password too long"))?;

    // Open networks must not advertise a WPA2 auth method.
    let auth_method = if pass.is_empty() {
        AuthMethod::None
    } else {
        AuthMethod::WPA2Personal
    };

    Ok(Configuration::Client(ClientConfiguration {
        ssid: h_ssid,
        password,
        auth_method,
        ..Default::default()
    }))
}
