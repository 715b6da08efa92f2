use super::{HardwareError, StationConfig};

#[cfg(target_os = "espidf")]
mod esp;

#[cfg(not(target_os = "espidf"))]
mod host {
    use super::*;
    use std::net::Ipv4Addr;
    use std::time::{Duration, Instant};

    use app_core::{NetworkDriver, NetworkError, WifiMode};
    use log::{debug, info};

    /// Host-side fake station for tests and desktop builds.
    #[derive(Debug)]
    pub struct SimulatedStation {
        connect_after: Option<Duration>,
        mode: Option<WifiMode>,
        started: Option<Instant>,
        addr: Ipv4Addr,
    }

    impl SimulatedStation {
        pub fn new(connect_after: Option<Duration>) -> Self {
            Self {
                connect_after,
                mode: None,
                started: None,
                addr: Ipv4Addr::new(10, 0, 2, random_host_octet()),
            }
        }

        fn connected_at(&self, now: Instant) -> bool {
            match (self.started, self.connect_after) {
                (Some(start), Some(after)) => now.saturating_duration_since(start) >= after,
                _ => false,
            }
        }
    }

    impl NetworkDriver for SimulatedStation {
        fn set_mode(&mut self, mode: WifiMode) -> Result<(), NetworkError> {
            debug!("simulated Wi-Fi mode: {:?}", mode);
            self.mode = Some(mode);
            Ok(())
        }

        fn begin_connect(&mut self, ssid: &str, _password: &str) -> Result<(), NetworkError> {
            if self.mode.is_none() {
                return Err(NetworkError::NotStarted);
            }
            info!("simulated association with '{}' (after {:?})", ssid, self.connect_after);
            self.started = Some(Instant::now());
            Ok(())
        }

        fn is_connected(&self) -> bool {
            self.connected_at(Instant::now())
        }

        fn local_address(&self) -> Option<Ipv4Addr> {
            self.is_connected().then_some(self.addr)
        }
    }

    pub fn init_station(config: StationConfig) -> Result<SimulatedStation, HardwareError> {
        debug!("simulated station init: {:?}", config);
        Ok(SimulatedStation::new(config.simulated_connect_after))
    }

    /// Stand-in for a DHCP lease; never the network or gateway address.
    fn random_host_octet() -> u8 {
        rand::random::<u8>() % 253 + 2
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn requires_station_mode_before_connect() {
            let mut sta = SimulatedStation::new(Some(Duration::ZERO));
            assert_eq!(sta.begin_connect("net", "pass"), Err(NetworkError::NotStarted));
            assert!(!sta.is_connected());
        }

        #[test]
        fn connects_once_delay_elapsed() {
            let mut sta = SimulatedStation::new(Some(Duration::ZERO));
            sta.set_mode(WifiMode::Station).unwrap();
            assert!(!sta.is_connected());
            assert_eq!(sta.local_address(), None);

            sta.begin_connect("net", "pass").unwrap();
            assert!(sta.is_connected());
            let addr = sta.local_address().unwrap();
            assert!(!addr.is_unspecified());
            assert_eq!(&addr.octets()[..3], &[10, 0, 2]);
            assert!(addr.octets()[3] >= 2);
        }

        #[test]
        fn never_connects_without_delay() {
            let mut sta = SimulatedStation::new(None);
            sta.set_mode(WifiMode::Station).unwrap();
            sta.begin_connect("net", "pass").unwrap();
            assert!(!sta.is_connected());
            assert_eq!(sta.local_address(), None);
        }

        #[test]
        fn waits_for_configured_delay() {
            let mut sta = SimulatedStation::new(Some(Duration::from_secs(3600)));
            sta.set_mode(WifiMode::Station).unwrap();
            sta.begin_connect("net", "pass").unwrap();
            let start = sta.started.unwrap();
            assert!(!sta.connected_at(start + Duration::from_secs(3599)));
            assert!(sta.connected_at(start + Duration::from_secs(3600)));
        }
    }
}

#[cfg(target_os = "espidf")]
pub use esp::{init_station, EspStation as Station};
#[cfg(not(target_os = "espidf"))]
pub use host::{init_station, SimulatedStation, SimulatedStation as Station};
