use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::RoiConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".roicalc.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a config from TOML and reject assumptions the model cannot use.
pub fn parse_and_validate_config(contents: &str) -> Result<RoiConfig> {
    let config = toml::from_str::<RoiConfig>(contents)?;
    config.resolve_assumptions(None).validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Missing or invalid files are errors.
pub fn load_config_from_path(path: &Path) -> Result<RoiConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration_at(format!("cannot read {}: {}", path.display(), e), path)
    })?;
    let config = parse_and_validate_config(&contents).map_err(|e| {
        Error::configuration_at(format!("{}: {}", path.display(), e), path)
    })?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<RoiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %config_path.display(), error = %e, "Failed to read config file");
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Ignoring invalid config, using defaults");
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Per-user config location, e.g. `~/.config/roicalc/config.toml` on Linux.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roicalc").join("config.toml"))
}

/// Find a config starting from `start`: the nearest `.roicalc.toml` in it or
/// its ancestors, then the per-user config file.
pub fn discover_config(start: PathBuf) -> Option<RoiConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .chain(user_config_path())
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> RoiConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "Failed to get current directory. Using default config.");
            return RoiConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        debug!(
            depth = MAX_TRAVERSAL_DEPTH,
            "No config found. Using default config."
        );
        RoiConfig::default()
    })
}
