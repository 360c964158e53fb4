use std::{fs, path::Path};

use anyhow::Result;

use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.doclocrc.json` in the current directory.
///
/// Returns false, without touching anything, when the file already exists.
pub fn init() -> Result<bool> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(false);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(true)
}
