//! Configuration loading from `.pyjumble.toml` or `pyproject.toml`.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section.
    pub pyjumble: PyjumbleConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options, all overridable from the command line.
pub struct PyjumbleConfig {
    /// Seed for the name generator. Omit for entropy seeding.
    pub seed: Option<u64>,
    /// Share one rename map across all files of a run.
    pub consistent: Option<bool>,
    /// List of folders to exclude.
    pub exclude_folders: Option<Vec<String>>,
}

/// Shape of a `pyproject.toml` carrying a `[tool.pyjumble]` table.
#[derive(Debug, Deserialize, Default)]
struct PyProject {
    #[serde(default)]
    tool: ToolSection,
}

#[derive(Debug, Deserialize, Default)]
struct ToolSection {
    #[serde(default)]
    pyjumble: PyjumbleConfig,
}

/// Loads configuration by walking up from `path` until a `.pyjumble.toml`
/// or a `pyproject.toml` with a `[tool.pyjumble]` table is found.
///
/// The dedicated file wins over `pyproject.toml` in the same directory.
/// Unparseable candidates are skipped, not fatal.
#[must_use]
pub fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let pyjumble_toml = current.join(CONFIG_FILENAME);
        if pyjumble_toml.exists() {
            if let Ok(content) = fs::read_to_string(&pyjumble_toml) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(pyjumble_toml);
                    return config;
                }
            }
        }

        let pyproject_toml = current.join(PYPROJECT_FILENAME);
        if pyproject_toml.exists() {
            if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                    return Config {
                        pyjumble: pyproject.tool.pyjumble,
                        config_file_path: Some(pyproject_toml),
                    };
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn loads_dedicated_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            "[pyjumble]\nseed = 17\nconsistent = true\nexclude_folders = [\"vendor\"]"
        )
        .unwrap();

        let config = load_from_path(dir.path());
        assert_eq!(config.pyjumble.seed, Some(17));
        assert_eq!(config.pyjumble.consistent, Some(true));
        assert_eq!(
            config.pyjumble.exclude_folders,
            Some(vec!["vendor".to_owned()])
        );
        assert_eq!(config.config_file_path, Some(config_path));
    }

    #[test]
    fn loads_pyproject_tool_table() {
        let dir = tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(PYPROJECT_FILENAME)).unwrap();
        writeln!(file, "[tool.pyjumble]\nseed = 4").unwrap();

        let config = load_from_path(dir.path());
        assert_eq!(config.pyjumble.seed, Some(4));
    }

    #[test]
    fn walks_up_to_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("pkg").join("sub");
        fs::create_dir_all(&nested).unwrap();
        let mut file = fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(file, "[pyjumble]\nconsistent = true").unwrap();

        let config = load_from_path(&nested);
        assert_eq!(config.pyjumble.consistent, Some(true));
    }

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from_path(dir.path());
        assert!(config.pyjumble.seed.is_none());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn pyproject_without_tool_table_yields_defaults() {
        let dir = tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(PYPROJECT_FILENAME)).unwrap();
        writeln!(file, "[project]\nname = \"demo\"").unwrap();

        let config = load_from_path(dir.path());
        assert!(config.pyjumble.seed.is_none());
        assert!(config.config_file_path.is_some());
    }
}
