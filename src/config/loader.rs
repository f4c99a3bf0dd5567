//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CookmateError, CookmateResult};

use super::types::Config;

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "cookmate.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

fn config_error(path: &Path, err: impl fmt::Display) -> CookmateError {
    CookmateError::Config {
        file: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CookmateResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
    parse_with_warnings(path, &content)
}

fn parse_with_warnings(path: &Path, content: &str) -> CookmateResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Layer the user config and then `<project_dir>/cookmate.toml` over the
/// defaults, key by key. Environment overrides are applied last.
pub fn load_or_default(project_dir: &Path) -> CookmateResult<(Config, Vec<ConfigWarning>)> {
    let mut layers = Vec::new();
    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            layers.push(user_config);
        }
    }
    let project_config = project_dir.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        layers.push(project_config);
    }

    let (config, warnings) = load_layers(&layers)?;
    Ok((with_env_overrides(config), warnings))
}

/// Merge config files in order, later files winning per key.
///
/// Each file is validated on its own first, so errors and warnings name the
/// file they come from.
pub(crate) fn load_layers(paths: &[PathBuf]) -> CookmateResult<(Config, Vec<ConfigWarning>)> {
    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
        let (_, file_warnings) = parse_with_warnings(path, &content)?;
        warnings.extend(file_warnings);
        let table: toml::Table = toml::from_str(&content).map_err(|e| config_error(path, e))?;
        merge_tables(&mut merged, table);
    }

    let config = match paths.last() {
        Some(last) => toml::Value::Table(merged)
            .try_into::<Config>()
            .map_err(|e| config_error(last, e))?,
        None => Config::default(),
    };
    Ok((config, warnings))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(value)) => {
                merge_tables(inner, value)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// `<config_dir>/cookmate/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cookmate").join("config.toml"))
}

/// Apply environment variable overrides (COOKMATE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`. Unparsable values are ignored.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(backend) = lookup("COOKMATE_BACKEND").and_then(|v| v.parse().ok()) {
        config.storage.backend = backend;
    }

    if let Some(dir) = lookup("COOKMATE_DB_DIR").filter(|v| !v.trim().is_empty()) {
        config.storage.dir = PathBuf::from(dir);
    }

    if let Some(file) = lookup("COOKMATE_DB_FILE").filter(|v| !v.trim().is_empty()) {
        config.storage.file = file;
    }

    if let Some(level) = lookup("COOKMATE_LOG").filter(|v| !v.trim().is_empty()) {
        config.logging.level = level;
    }

    if let Some(format) = lookup("COOKMATE_LOG_FORMAT").and_then(|v| v.parse().ok()) {
        config.logging.format = format;
    }

    if let Some(days) = lookup("COOKMATE_EXPIRING_DAYS").and_then(|v| v.trim().parse().ok()) {
        config.inventory.expiring_days = days;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "backend",
        "dir",
        "file",
        "logging",
        "level",
        "format",
        "inventory",
        "expiring_days",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
