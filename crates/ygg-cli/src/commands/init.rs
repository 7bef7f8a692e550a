use std::path::Path;

use ygg_core::{CONFIG_FILE, write_default_config_files};

use crate::pout;

pub fn run(cfg_dir: &Path, force: bool, json: bool) -> anyhow::Result<()> {
    write_default_config_files(cfg_dir, force)?;
    pout(
        json,
        serde_json::json!({"message": "init complete", "config_dir": cfg_dir}),
        &format!("Wrote {}", cfg_dir.join(CONFIG_FILE).display()),
    )
}
