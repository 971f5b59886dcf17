//! Configuration for scan behavior.
//!
//! Load order: `.scout/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level codescout configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub scan: ScanConfig,
}

/// Scan behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum traversal depth below the scan root. The default of 3 is a
    /// core-level contract, not a transport default.
    pub max_depth: usize,
    /// Wall-clock budget for file discovery, in milliseconds.
    pub collect_timeout_ms: u64,
    /// Wall-clock budget for the whole scan (discovery + extraction).
    pub scan_timeout_ms: u64,
    /// Name of the project ignore file read from the scan root.
    /// Only the root-level file is consulted, never nested ones.
    pub ignore_file: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            collect_timeout_ms: 5_000,
            scan_timeout_ms: 30_000,
            ignore_file: ".gitignore".to_string(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl ScoutConfig {
    /// Load config from `.scout/config.toml` in the project root, with env
    /// var overrides. Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".scout").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("SCOUT_MAX_DEPTH", &mut config.scan.max_depth);
        env_override("SCOUT_COLLECT_TIMEOUT_MS", &mut config.scan.collect_timeout_ms);
        env_override("SCOUT_SCAN_TIMEOUT_MS", &mut config.scan.scan_timeout_ms);

        if config.scan.scan_timeout_ms < config.scan.collect_timeout_ms {
            anyhow::bail!(
                "scan_timeout_ms ({}) must not be less than collect_timeout_ms ({})",
                config.scan.scan_timeout_ms,
                config.scan.collect_timeout_ms,
            );
        }

        Ok(config)
    }
}
