use crate::commands::{CmdMessage, CmdResult, StockPaths};
use crate::config::{StockConfig, CONFIG_FILENAME};
use crate::error::{Result, StockError};
use crate::model::Scope;
use std::fs;

/// Writes a default config and an empty data file, keeping whatever already exists.
pub fn run(paths: &StockPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    let mut result = CmdResult::default();
    let config = if dir.join(CONFIG_FILENAME).exists() {
        StockConfig::load(&dir)?
    } else {
        let config = StockConfig::default();
        config.save(&dir)?;
        config
    };

    let data_path = config.data_path(&dir);
    if !data_path.exists() {
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&data_path, "").map_err(StockError::Io)?;
    }

    result.add_message(CmdMessage::success(format!(
        "Initialized stockman inventory at {}",
        dir.display()
    )));
    Ok(result.with_config(config).with_store_path(data_path))
}
