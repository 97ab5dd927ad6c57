mod schema;
mod validation;

pub use schema::Config;
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze::DEFAULT_QUALIFY_THRESHOLD;

/// Get the config directory path (~/.config/lead-scout/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("lead-scout")
}

/// Get the default config file path (~/.config/lead-scout/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/lead-scout/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Create it with at least `owner: <you>`",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

fn parse_config(content: &str) -> Result<Config> {
    Ok(serde_saphyr::from_str(content)?)
}

impl Config {
    /// Lead book path, falling back to the default location.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(crate::leads::get_lead_book_path)
    }

    pub fn qualify_threshold(&self) -> u32 {
        self.qualify_threshold.unwrap_or(DEFAULT_QUALIFY_THRESHOLD)
    }

    /// Resolve a relative store path against the directory holding the config file.
    pub fn resolve_store_relative_to(&mut self, config_path: &Path) {
        if let (Some(store), Some(dir)) = (self.store.as_ref(), config_path.parent()) {
            if store.is_relative() {
                self.store = Some(dir.join(store));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("owner: alice@acme.test\n").unwrap();
        assert_eq!(config.owner, "alice@acme.test");
        assert!(config.store.is_none());
        assert_eq!(config.qualify_threshold(), 70);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
owner: alice
store: /tmp/leads.json
qualify_threshold: 80
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.store_path(), PathBuf::from("/tmp/leads.json"));
        assert_eq!(config.qualify_threshold(), 80);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_config("owner: alice\nscoring: {}\n").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let path = env::temp_dir().join("lead_scout_test_no_config.yaml");
        let _ = fs::remove_file(&path);
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = env::temp_dir().join("lead_scout_test_config.yaml");
        fs::write(&path, "owner: bob\nqualify_threshold: 55\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.owner, "bob");
        assert_eq!(config.qualify_threshold(), 55);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_relative_store_resolved_against_config_dir() {
        let mut config = parse_config("owner: alice\nstore: leads.json\n").unwrap();
        config.resolve_store_relative_to(Path::new("/etc/lead-scout/config.yaml"));
        assert_eq!(
            config.store_path(),
            PathBuf::from("/etc/lead-scout/leads.json")
        );
    }
}
