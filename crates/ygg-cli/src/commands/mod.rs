use std::path::Path;

use ygg_core::{CONFIG_FILE, ServiceConfig, load_config_from_dir};

pub mod init;
pub mod keys;
pub mod render;

/// The config file when present, otherwise defaults rooted at `cfg_dir`.
pub fn load_config(cfg_dir: &Path) -> anyhow::Result<ServiceConfig> {
    if cfg_dir.join(CONFIG_FILE).exists() {
        Ok(load_config_from_dir(cfg_dir)?)
    } else {
        tracing::debug!(dir = %cfg_dir.display(), "no config file, using defaults");
        Ok(ServiceConfig::defaults_in(cfg_dir))
    }
}
