use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::prize::Prize;

pub const DEFAULT_FILE_NAME: &str = "draw_config.json";

// The JSON file has the following structure:
// {
//    "range_start": 1,
//    "range_end": 200,
//    "prizes": [ { "name": "...", "count": 3 }, ... ]
// }
// Prizes are checked while parsing; range and name uniqueness are checked by the engine.
#[derive(Debug, Deserialize)]
pub struct DrawConfig {
    pub range_start: i64,
    pub range_end: i64,
    pub prizes: Vec<Prize>,
}

pub fn read_draw_config(path: &Path) -> Result<DrawConfig, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);
    let config: DrawConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Picks the config file: explicit path, then `DRAW_CONFIG`, then the working
/// directory, then the per-user config directory.
pub fn locate_draw_config(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Ok(path) = std::env::var("DRAW_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let mut candidates = vec![PathBuf::from(DEFAULT_FILE_NAME)];
    if let Some(dir) = dirs_next::config_dir() {
        candidates.push(dir.join("wedding-draw").join(DEFAULT_FILE_NAME));
    }
    candidates.into_iter().find(|p| p.is_file())
}
