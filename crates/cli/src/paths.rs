//! `dugout paths` — show where datasets are looked up.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dugout_config::{DataPaths, Settings};

use crate::CliError;

pub fn cmd_paths(
    data_root: Option<PathBuf>,
    date: Option<NaiveDate>,
    settings: &Settings,
) -> Result<(), CliError> {
    let paths = DataPaths::resolve(data_root, settings);

    println!("data root:   {} (from {})", paths.root().display(), paths.source());
    println!("settings:    {}", Settings::config_path_display());
    println!("performance: {}", describe(&paths.performance_file()));
    if let Some(date) = date {
        println!("daily:       {}", describe(&paths.daily_file(date)));
    }

    Ok(())
}

fn describe(path: &Path) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found)", path.display())
    }
}
