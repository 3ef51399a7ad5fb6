use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::{DEFAULT_CONFIG_PATH, StaticConfig};

/// Process-wide configuration, set once at startup
static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

fn cell_from(path: &str) -> &'static ArcSwap<StaticConfig> {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load_from(path)))
}

/// Current configuration snapshot.
///
/// Falls back to loading `config.toml` (or built-in defaults) when nothing
/// was initialized yet.
pub fn get_config() -> Arc<StaticConfig> {
    cell_from(DEFAULT_CONFIG_PATH).load_full()
}

/// `None` until one of the `init_*` functions (or [`get_config`]) has run
pub fn try_get_config() -> Option<Arc<StaticConfig>> {
    CONFIG.get().map(ArcSwap::load_full)
}

/// ```no_run
/// country_density::config::init_config();
/// ```
pub fn init_config() {
    cell_from(DEFAULT_CONFIG_PATH);
}

/// Load from an explicit TOML path; a no-op once configuration is set
pub fn init_config_from(path: &str) {
    cell_from(path);
}
