use crate::api::{StockApi, StockPaths};
use crate::config::{StockConfig, CONFIG_FILENAME};
use crate::error::{Result, StockError};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the per-user data directory (used by tests and portable installs).
pub const GLOBAL_DATA_ENV: &str = "STOCKMAN_GLOBAL_DATA";

pub struct StockContext {
    pub api: StockApi<FileStore>,
    pub scope: Scope,
    pub config: StockConfig,
}

/// Walks up from `cwd` looking for a directory holding a `stockman.json`.
/// Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(CONFIG_FILENAME).is_file() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "stockman", "stockman")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockError::Store("Could not determine the user data directory".into()))
}

/// Resolves scope, config and data file, then opens the inventory.
///
/// `data_file` (the `--file` flag) wins over the configured data file.
pub fn initialize(cwd: &Path, use_global: bool, data_file: Option<&Path>) -> Result<StockContext> {
    let project_dir = find_project_root(cwd).unwrap_or_else(|| cwd.to_path_buf());
    let global_dir = global_data_dir()?;

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let scope_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = StockConfig::load(scope_dir)?;

    let data_path = match data_file {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => config.data_path(scope_dir),
    };
    debug!(scope = ?scope, data = %data_path.display(), "opening inventory");

    let paths = StockPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let api = StockApi::open(FileStore::new(data_path), paths)?
        .with_categories(config.categories.clone());

    Ok(StockContext { api, scope, config })
}
