//! Where folio keeps its settings and log files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Settings file name
pub const SETTINGS_FILE: &str = "folio.json";
/// Default log file name for `--log` without a path
pub const LOG_FILE: &str = "folio.log";
/// Environment override for the config directory
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Overrides for the default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → `FOLIO_CONFIG_DIR` → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));
        Self { config_dir }
    }
}

/// Path to a configuration file.
///
/// Priority:
/// 1. CLI `--config-dir`
/// 2. `FOLIO_CONFIG_DIR`
/// 3. Current folder IF it already holds folio files
/// 4. Platform config directory from dirs-next (`~/.config/folio` on Linux)
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    config_dir(config).join(name)
}

/// Path to a data file (logs). Same priority as [`config_file`], falling back
/// to the platform data directory.
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    data_dir(config).join(name)
}

/// Create the config and data directories if missing
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = config_dir(config);
    let data_dir = data_dir(config);

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    if data_dir != config_dir {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }
    Ok(())
}

fn has_local_files(dir: &Path) -> bool {
    [SETTINGS_FILE, LOG_FILE].iter().any(|f| dir.join(f).exists())
}

/// Custom dir, else the current dir if it has folio files
fn override_dir(config: &PathConfig) -> Option<PathBuf> {
    if let Some(dir) = &config.config_dir {
        return Some(dir.clone());
    }
    std::env::current_dir().ok().filter(|dir| has_local_files(dir))
}

fn config_dir(config: &PathConfig) -> PathBuf {
    override_dir(config)
        .or_else(|| dirs_next::config_dir().map(|d| d.join("folio")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn data_dir(config: &PathConfig) -> PathBuf {
    override_dir(config)
        .or_else(|| dirs_next::data_dir().map(|d| d.join("folio")))
        .unwrap_or_else(|| PathBuf::from("."))
}
