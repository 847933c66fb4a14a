//! Data root resolution and the file layout under it.
//!
//! Layout:
//!
//! ```text
//! <root>/2025/august/august_09_2025.json
//! <root>/predictions/player_performance_latest.json
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::settings::Settings;

/// Environment variable naming the data root.
pub const DATA_PATH_ENV: &str = "BASEBALL_DATA_PATH";

const DEFAULT_ROOT: &str = "data";
const PREDICTIONS_DIR: &str = "predictions";
const PERFORMANCE_FILE: &str = "player_performance_latest.json";

/// Where the data root came from, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Flag,
    Env,
    Settings,
    Default,
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--data-root"),
            Self::Env => write!(f, "{DATA_PATH_ENV}"),
            Self::Settings => write!(f, "settings.json"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
    source: RootSource,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), source: RootSource::Flag }
    }

    /// Resolve from flag, then `BASEBALL_DATA_PATH`, then settings, then `./data`.
    pub fn resolve(explicit: Option<PathBuf>, settings: &Settings) -> Self {
        Self::resolve_with(explicit, std::env::var_os(DATA_PATH_ENV), settings)
    }

    pub fn resolve_with(
        explicit: Option<PathBuf>,
        env: Option<OsString>,
        settings: &Settings,
    ) -> Self {
        let resolved = if let Some(root) = explicit {
            Self { root, source: RootSource::Flag }
        } else if let Some(root) = env.filter(|v| !v.is_empty()) {
            Self { root: PathBuf::from(root), source: RootSource::Env }
        } else if let Some(ref root) = settings.data_root {
            Self { root: root.clone(), source: RootSource::Settings }
        } else {
            Self { root: PathBuf::from(DEFAULT_ROOT), source: RootSource::Default }
        };
        log::debug!("data root {} (from {})", resolved.root.display(), resolved.source);
        resolved
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> RootSource {
        self.source
    }

    /// Per-day file, e.g. `2025/august/august_09_2025.json`.
    pub fn daily_file(&self, date: NaiveDate) -> PathBuf {
        let month = date.format("%B").to_string().to_lowercase();
        self.root
            .join(date.format("%Y").to_string())
            .join(&month)
            .join(format!("{month}_{}.json", date.format("%d_%Y")))
    }

    pub fn predictions_dir(&self) -> PathBuf {
        self.root.join(PREDICTIONS_DIR)
    }

    pub fn performance_file(&self) -> PathBuf {
        self.predictions_dir().join(PERFORMANCE_FILE)
    }
}
