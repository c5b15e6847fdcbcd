//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::RelevelError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .relevel.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use relevel::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Missing readings: {}", config.missing_readings);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(RelevelError::Io {
                    context: format!("reading {}", config_path.display()),
                    source,
                }
                .into());
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .relevel.toml")?;

        config
            .rule_table()
            .context("Invalid rule configuration")?;

        log::debug!(
            "loaded {} with {} custom rule(s)",
            config_path.display(),
            config.rules.len()
        );

        Ok(config)
    }

    /// Save config to .relevel.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, &contents)
            .map_err(|source| RelevelError::Io {
                context: format!("writing {}", config_path.display()),
                source,
            })?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        RealFileSystem.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrient::Nutrient;
    use crate::recommend::MissingReadingPolicy;
    use std::io;
    use std::sync::{Arc, Mutex};

    // Mock FileSystem for testing
    #[derive(Default)]
    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
        should_fail_write: bool,
        written_content: Arc<Mutex<Option<String>>>,
    }

    impl MockFileSystem {
        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                ..Default::default()
            }
        }

        fn get_written_content(&self) -> Option<String> {
            self.written_content.lock().unwrap().clone()
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
            if self.should_fail_write {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            let contents_str = String::from_utf8_lossy(contents.as_ref()).to_string();
            *self.written_content.lock().unwrap() = Some(contents_str);
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            self.file_content.is_some()
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let toml_content = r#"
missing-readings = "skip"

[[rules]]
nutrient = "magnesium"
threshold = 1.7
foods = ["Pumpkin seeds", "Almonds"]
"#;
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), toml_content).unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.missing_readings, MissingReadingPolicy::Skip);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].nutrient, Nutrient::Magnesium);
        assert_eq!(config.rules[0].threshold, 1.7);
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::default();
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_error() {
        let fs = MockFileSystem::with_content("invalid { toml syntax");
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);
        assert!(result.is_err(), "Expected error for invalid TOML");
    }

    #[test]
    fn test_loader_with_duplicate_rule_returns_error() {
        let fs = MockFileSystem::with_content(
            r#"
[[rules]]
nutrient = "iron"
threshold = 50
foods = ["Tofu"]
"#,
        );
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        assert!(err.to_string().contains("Invalid rule configuration"));
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem {
            should_fail_read: true,
            ..Default::default()
        };
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();

        // Anything but NotFound must surface as an I/O error
        assert!(err.to_string().contains("reading /test/.relevel.toml"));
        assert_eq!(crate::error::ErrorFormatter::exit_code(&err), 74);
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_with_write_error_returns_error() {
        let fs = MockFileSystem {
            should_fail_write: true,
            ..Default::default()
        };
        let err = ConfigLoader::save_with_fs(&ConfigFile::default(), Path::new("/test"), &fs)
            .unwrap_err();

        assert!(err.to_string().contains("writing /test/.relevel.toml"));
        assert!(matches!(
            err.downcast_ref::<RelevelError>(),
            Some(RelevelError::Io { .. })
        ));
        assert_eq!(crate::error::ErrorFormatter::exit_code(&err), 74);
    }

    #[test]
    fn test_save_writes_rules_and_policy() {
        let fs = MockFileSystem::default();
        ConfigLoader::save_with_fs(&ConfigFile::starter(), Path::new("/test"), &fs).unwrap();

        let content = fs.get_written_content().unwrap();
        assert!(content.contains("rules"));
        assert!(content.contains("assume-zero"));
        assert!(content.contains("vitaminB12"));
        assert!(content.contains("replace-default-rules = true"));
    }

    #[test]
    fn test_save_then_load_round_trips_starter_config() {
        let temp = tempfile::tempdir().unwrap();
        ConfigLoader::save(&ConfigFile::starter(), temp.path()).unwrap();

        assert!(ConfigLoader::exists(temp.path()));
        let loaded = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(loaded, ConfigFile::starter());
    }

    #[test]
    fn test_exists_returns_false_for_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(!ConfigLoader::exists(temp.path()));
    }
}
