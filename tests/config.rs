#[cfg(test)]
mod tests {
    use payr::libs::config::{Config, DatabaseConfig, FileConfig};
    use payr::libs::storage::StorageMode;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Redirects the home/appdata directory to a temporary location so
    /// config tests never touch a real installation.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.mode.is_none());
        assert!(config.database.is_none());
        assert!(config.file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.mode.is_none());
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            mode: Some(StorageMode::File),
            database: Some(DatabaseConfig {
                address: PathBuf::from("payroll.db"),
            }),
            file: Some(FileConfig {
                path: PathBuf::from("payroll.csv"),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.mode, Some(StorageMode::File));
        assert_eq!(read_config.database, config.database);
        assert_eq!(read_config.file, config.file);
    }

    #[test]
    fn test_storage_mode_labels_match_serialized_form() {
        for mode in [StorageMode::Memory, StorageMode::File, StorageMode::Database] {
            let serialized = serde_json::to_string(&mode).unwrap();
            assert_eq!(serialized, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_file_path_falls_back_to_data_directory(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        let path = config.file_path().unwrap();
        assert!(path.ends_with("payroll.csv"));
    }
}
