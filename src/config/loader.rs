//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::{builtin_networks, Config};

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "deployer.toml";

/// Overrides `default_network`
pub const ENV_NETWORK: &str = "DEPLOYER_NETWORK";

/// Overrides `paths.deployments`
pub const ENV_DEPLOYMENTS_DIR: &str = "DEPLOYER_DEPLOYMENTS_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    /// Directory relative paths resolve against
    pub base: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    /// The config with `DEPLOYER_*` overrides applied
    ///
    /// A relative `DEPLOYER_DEPLOYMENTS_DIR` resolves against [`Self::base`],
    /// the same as `paths.deployments` in the file.
    pub fn with_env_overrides<F>(&self, get_env: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        resolve_paths(with_env_overrides(self.config.clone(), get_env), &self.base)
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for (name, network) in builtin_networks() {
        config.networks.entry(name).or_insert(network);
    }

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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config, `<project_root>/deployer.toml`, or defaults
///
/// An explicit path that cannot be read is an error; a missing
/// `deployer.toml` is not. Relative paths inside the config resolve
/// against the directory holding the config file (or `project_root`).
pub fn load_or_default(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<LoadedConfig, ConfigError> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(project_root.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let Some(path) = candidate else {
        tracing::debug!(root = %project_root.display(), "no config file, using defaults");
        return Ok(LoadedConfig {
            config: resolve_paths(Config::default(), project_root),
            source: None,
            base: project_root.to_path_buf(),
            warnings: Vec::new(),
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(project_root);
    tracing::debug!(config = %path.display(), "loaded config");

    Ok(LoadedConfig {
        config: resolve_paths(config, base),
        source: Some(path.clone()),
        base: base.to_path_buf(),
        warnings,
    })
}

/// Make `paths.*` absolute relative to `base`
pub fn resolve_paths(mut config: Config, base: &Path) -> Config {
    if config.paths.artifacts.is_relative() {
        config.paths.artifacts = base.join(&config.paths.artifacts);
    }
    if config.paths.deployments.is_relative() {
        config.paths.deployments = base.join(&config.paths.deployments);
    }
    config
}

/// Apply environment variable overrides (DEPLOYER_* prefix)
///
/// `get_env` is injected so callers decide where variables come from.
pub fn with_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DEPLOYER_NETWORK
    if let Some(network) = get_env(ENV_NETWORK).filter(|v| !v.trim().is_empty()) {
        config.default_network = Some(network.trim().to_string());
    }

    // DEPLOYER_DEPLOYMENTS_DIR
    if let Some(dir) = get_env(ENV_DEPLOYMENTS_DIR).filter(|v| !v.trim().is_empty()) {
        config.paths.deployments = PathBuf::from(dir);
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
        "default_network",
        "label_key",
        "next_steps",
        "artifact",
        "name",
        "constructor_args",
        "label",
        "paths",
        "artifacts",
        "deployments",
        "networks",
        "url",
        "accounts",
        "private_key",
        "env",
        "verification",
        "function",
        "kind",
        "output",
        "color",
        "unicode",
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
