#[cfg(target_os = "espidf")]
fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    if let Err(err) = app::run() {
        log::error!("app error: {err}");
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    let env = env_logger::Env::default()
        .filter_or("STATION_LOG_LEVEL", "debug")
        .write_style_or("STATION_LOG_STYLE", "always");

    env_logger::init_from_env(env);

    if let Err(err) = app::run() {
        log::error!("app error: {err}");
    }
}
