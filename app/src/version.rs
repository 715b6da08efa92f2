use log::info;

pub const FW_VERSION_MAJ: &str = env!("CARGO_PKG_VERSION_MAJOR");
pub const FW_VERSION_MIN: &str = env!("CARGO_PKG_VERSION_MINOR");
pub const BUILD_TIME: &str = env!("STATION_BUILD_TIME");

const RULE: &str = "********************************************************************************";

pub fn firmware_line() -> String {
    format!("Firmware v{}.{}", FW_VERSION_MAJ, FW_VERSION_MIN)
}

pub fn log_banner() {
    info!("{RULE}");
    info!("{}", firmware_line());
    info!("Built {BUILD_TIME}");
    info!("{RULE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firmware_line_uses_major_minor() {
        assert_eq!(firmware_line(), "Firmware v1.0");
    }

    #[test]
    fn rule_is_eighty_columns() {
        assert_eq!(RULE.len(), 80);
        assert!(!BUILD_TIME.is_empty());
    }
}
