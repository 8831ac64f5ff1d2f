//! Engine configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `ROSTER_SEED_FILE` - JSON array of plain characters imported at startup (optional)
//! - `ROSTER_LOG_FILTER` - Default tracing filter when `RUST_LOG` is unset (default: `roster_engine=info`)
//! - `ROSTER_POWER_THRESHOLD` - Minimum combat power for "powerful" warriors (default: 600)

use std::path::{Path, PathBuf};

use roster_domain::PlainCharacter;

pub const DEFAULT_LOG_FILTER: &str = "roster_engine=info";
pub const DEFAULT_POWER_THRESHOLD: u32 = 600;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Seed file {path} is not a JSON array of characters: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed_file: Option<PathBuf>,
    pub log_filter: String,
    pub power_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            power_threshold: DEFAULT_POWER_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Load configuration from process environment variables.
    ///
    /// Missing values use defaults; unparseable numbers are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let power_threshold = match non_empty("ROSTER_POWER_THRESHOLD") {
            Some(val) => match val.parse::<u32>() {
                Ok(threshold) => threshold,
                Err(_) => {
                    tracing::warn!(
                        val = %val,
                        default = defaults.power_threshold,
                        "ROSTER_POWER_THRESHOLD is not a valid u32, ignoring"
                    );
                    defaults.power_threshold
                }
            },
            None => defaults.power_threshold,
        };

        Self {
            seed_file: non_empty("ROSTER_SEED_FILE").map(PathBuf::from),
            log_filter: non_empty("ROSTER_LOG_FILTER").unwrap_or(defaults.log_filter),
            power_threshold,
        }
    }

    /// Read the configured seed file, if any.
    pub fn load_seed(&self) -> Result<Option<Vec<PlainCharacter>>, ConfigError> {
        self.seed_file.as_deref().map(read_seed_file).transpose()
    }
}

/// Parse a JSON array of plain characters.
///
/// Records are not validated here; that happens on import.
pub fn read_seed_file(path: &Path) -> Result<Vec<PlainCharacter>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `.env.local` then `.env` from the workspace root, without overriding
/// variables that are already set.
pub fn load_dotenv() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
