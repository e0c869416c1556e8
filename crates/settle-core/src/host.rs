//! Host application version configuration.
//!
//! The host ships a `versions/config.json` whose location depends on the
//! platform: under the user's config directory on Linux, next to the
//! executable's `resources/` tree elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Platform family that decides where the host keeps its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    /// Windows and macOS builds share one layout.
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

/// Contents of the host's `versions/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConfig {
    pub base_version: String,
    pub cur_version: String,
    pub prev_version: String,
    #[serde(default)]
    pub on_error_versions: Vec<String>,
    pub build_id: String,
}

impl VersionConfig {
    /// Fallback used when the host's own file is missing.
    pub fn default_for(platform: Platform) -> Self {
        let (version, build_id) = match platform {
            Platform::Linux => ("3.2.12-27254", "27254"),
            Platform::Other => ("9.9.15-27391", "27391"),
        };
        Self {
            base_version: version.to_string(),
            cur_version: version.to_string(),
            prev_version: String::new(),
            on_error_versions: Vec::new(),
            build_id: build_id.to_string(),
        }
    }
}

/// Locate the host's version config for `platform`.
///
/// Returns `None` if the file does not exist.
pub fn version_config_path(exe_path: &Path, platform: Platform) -> Option<PathBuf> {
    version_config_path_in(dirs::home_dir().as_deref(), exe_path, platform)
}

/// Same as [`version_config_path`] with an explicit home directory.
pub fn version_config_path_in(
    home: Option<&Path>,
    exe_path: &Path,
    platform: Platform,
) -> Option<PathBuf> {
    let candidate = match platform {
        Platform::Linux => home?.join(".config").join("QQ"),
        Platform::Other => exe_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("resources")
            .join("app"),
    }
    .join("versions")
    .join("config.json");

    candidate.exists().then_some(candidate)
}

/// Read and parse a version config file.
pub fn load_version_config(path: &Path) -> Result<VersionConfig, CoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_default_for_platforms() {
        let linux = VersionConfig::default_for(Platform::Linux);
        assert_eq!(linux.cur_version, "3.2.12-27254");
        assert_eq!(linux.build_id, "27254");
        assert!(linux.prev_version.is_empty());

        let other = VersionConfig::default_for(Platform::Other);
        assert_eq!(other.base_version, "9.9.15-27391");
        assert_eq!(other.build_id, "27391");
        assert!(other.on_error_versions.is_empty());
    }

    #[test]
    fn test_linux_path_under_home() {
        let home = tempfile::tempdir().unwrap();
        let expected = home.path().join(".config/QQ/versions/config.json");

        assert_eq!(
            version_config_path_in(Some(home.path()), Path::new(""), Platform::Linux),
            None
        );

        write_config(&expected, "{}");
        assert_eq!(
            version_config_path_in(Some(home.path()), Path::new(""), Platform::Linux),
            Some(expected)
        );
    }

    #[test]
    fn test_linux_without_home() {
        assert_eq!(
            version_config_path_in(None, Path::new("/opt/qq/qq"), Platform::Linux),
            None
        );
    }

    #[test]
    fn test_other_path_next_to_executable() {
        let install = tempfile::tempdir().unwrap();
        let exe = install.path().join("QQ.exe");
        let expected = install.path().join("resources/app/versions/config.json");
        write_config(&expected, "{}");

        assert_eq!(
            version_config_path_in(None, &exe, Platform::Other),
            Some(expected)
        );
    }

    #[test]
    fn test_load_version_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        write_config(
            &path,
            r#"{"baseVersion":"9.9.16-28788","curVersion":"9.9.16-28788","prevVersion":"","onErrorVersions":[],"buildId":"28788"}"#,
        );

        let config = load_version_config(&path).unwrap();
        assert_eq!(config.build_id, "28788");
        assert_eq!(config.cur_version, "9.9.16-28788");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_version_config(&missing), Err(CoreError::Io(_))));

        let broken = dir.path().join("broken.json");
        write_config(&broken, "{not json");
        assert!(matches!(
            load_version_config(&broken),
            Err(CoreError::Serialization(_))
        ));
    }
}
