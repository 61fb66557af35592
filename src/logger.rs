/// Initialises `env_logger`. Logging is off unless `RUST_LOG` enables it.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Off)
        .parse_default_env()
        .init();
}
