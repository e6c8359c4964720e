use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub static CONFIG_PATH: Lazy<&'static Path> = Lazy::new(|| {
    Path::new(
        option_env!("TIEPOINT_CONFIG_PATH").unwrap_or("/usr/local/etc/tiepoint/config.toml"),
    )
});

/// Settings for preparing and judging a tie-point set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Largest per-axis work-point offset for two tie-points with the same
    /// reference point to count as the same correspondence.
    pub max_dif: f64,
    pub remove_duplicates: bool,
    /// Shift both coordinate systems onto the control-point centroids.
    pub recenter: bool,
    /// Allowed distance of anisomorphism and similarity from 1.0.
    pub tolerance: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_dif: 0.5,
            remove_duplicates: true,
            recenter: false,
            tolerance: 0.1,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<EvaluationConfig> {
    let path = path.unwrap_or(&CONFIG_PATH);
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(EvaluationConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    let cfg: EvaluationConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
    if cfg.max_dif < 0.0 || cfg.tolerance < 0.0 {
        anyhow::bail!(
            "invalid config {}: max_dif and tolerance must be non-negative",
            path.display()
        );
    }
    Ok(cfg)
}

pub fn save_config(cfg: &EvaluationConfig, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or(&CONFIG_PATH);
    let data = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data).with_context(|| format!("writing config {}", path.display()))?;
    Ok(())
}
