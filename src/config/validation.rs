use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.targets.daily == 0 {
        errors.push("targets.daily: must be positive".to_string());
    }
    if config.targets.weekly == 0 {
        errors.push("targets.weekly: must be positive".to_string());
    }
    if config.targets.monthly == 0 {
        errors.push("targets.monthly: must be positive".to_string());
    }

    if let Some(store) = &config.store {
        if store.as_os_str().is_empty() {
            errors.push("store: must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
