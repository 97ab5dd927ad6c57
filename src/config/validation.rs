use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(threshold) = config.qualify_threshold {
        if threshold > 100 {
            errors.push(format!(
                "qualify_threshold: must be between 0 and 100, got {}",
                threshold
            ));
        }
    }

    if let Some(ref store) = config.store {
        if store.as_os_str().is_empty() {
            errors.push("store: path must not be empty".to_string());
        } else if store.is_dir() {
            errors.push(format!("store: {} is a directory", store.display()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
