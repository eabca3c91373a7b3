//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting PolyEdit");

    let config = match polyedit_app::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using defaults: {}", e);
            polyedit_app::AppConfig::default()
        }
    };

    if let Err(e) = pollster::block_on(polyedit_app::App::run(config)) {
        log::error!("Event loop failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
