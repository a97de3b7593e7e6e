/// Route `log` output to stderr, keeping stdout for the JSON record.
///
/// In debug mode the filter comes from `RUST_LOG`, defaulting to `debug`;
/// otherwise everything at info and above is shown.
pub fn init_logging(debug_mode: bool) {
    if debug_mode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::builder()
            .filter(None, log::LevelFilter::Info)
            .init();
    }
}
