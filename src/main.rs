use mentify::config::AppConfig;

/// Defaults compiled into the binary; never override a variable that is already set.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

/// A local `.env` takes precedence; the bundled defaults fill whatever is still unset.
#[cfg(not(target_arch = "wasm32"))]
fn load_environment() {
    // A missing .env is the normal case outside development.
    let _ = dotenvy::dotenv();
    apply_bundled_defaults();
}

// Browsers have no process environment to read a .env from.
#[cfg(target_arch = "wasm32")]
fn load_environment() {
    apply_bundled_defaults();
}

fn apply_bundled_defaults() {
    for (key, value) in bundled_pairs(BUNDLED_CONFIG) {
        if std::env::var_os(key).is_some() {
            continue;
        }
        // SAFETY: runs first thing in main, before the renderer starts any threads.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

fn bundled_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // The renderer may already have installed a subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing(_config: &AppConfig) {}

fn main() {
    load_environment();
    let config = AppConfig::from_env();
    init_tracing(&config);
    tracing::info!(
        model = config.default_model.value(),
        theme = ?config.default_theme,
        "starting mentify"
    );
    dioxus::launch(mentify::ui::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_pairs_skip_comments() {
        let pairs: Vec<_> = bundled_pairs("# note\n\nA = 1\nB=two\nbroken\n").collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "two")]);
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = AppConfig::from_lookup(|key| {
            bundled_pairs(BUNDLED_CONFIG)
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        });
        assert_eq!(config, AppConfig::default());
    }
}
