use genify::config::parse_env_file;

/// Defaults compiled into the binary for builds that ship without a `.env`.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn load_environment() {
    #[cfg(not(target_arch = "wasm32"))]
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("loaded {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("ignoring unreadable .env: {err}"),
    }

    for (key, value) in parse_env_file(BUNDLED_CONFIG) {
        if std::env::var_os(&key).is_none() {
            // SAFETY: runs at startup before any other thread exists.
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn main() {
    let _ = tracing_subscriber::fmt().try_init();
    load_environment();
    dioxus::launch(genify::ui::App);
}
