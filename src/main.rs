/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Parse KEY=VALUE
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Only set if not already set (allow env override)
            if std::env::var(key).is_err() {
                // SAFETY: We're setting env vars at startup before any threads are spawned
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    load_dotenv();
    init_tracing();

    // A missing API credential is a configuration fault, not something the
    // screens should discover mid-request.
    if let Err(err) = life_alive::ai::init_from_env() {
        eprintln!("life-alive: {err:#}");
        std::process::exit(1);
    }

    dioxus::launch(life_alive::ui::App);
}
