fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }

    // Stamp shown in the boot banner.
    let built = chrono::Utc::now().format("%b %d %Y %H:%M:%S UTC");
    println!("cargo:rustc-env=STATION_BUILD_TIME={built}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=cfg.toml");
}
