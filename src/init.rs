use env_logger::Env;

/// Sets up logging at `warn` by default, overridable with `RUST_LOG`
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
