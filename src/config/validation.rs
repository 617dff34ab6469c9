use crate::error::AppError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Validates the configuration settings
///
/// # Arguments
/// * `log_filter` - The tracing filter directive to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - Log filter cannot be empty and must parse as a tracing filter directive
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(log_filter: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if log_filter.trim().is_empty() {
        return Err(AppError::config_error("Log filter cannot be empty"));
    }

    EnvFilter::try_new(log_filter).map_err(|e| {
        AppError::config_error(format!("Invalid log filter '{log_filter}': {e}"))
    })?;

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_filter_is_valid() {
        assert!(validate_config(crate::constants::DEFAULT_LOG_FILTER, &None).is_ok());
    }

    #[test]
    fn test_empty_filter_rejected() {
        let result = validate_config("  ", &None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_malformed_filter_rejected() {
        let result = validate_config("gaming_room=loud", &None);
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("Invalid log filter")));
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config("info", &Some(String::new()));
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("cannot be empty")));
    }

    #[test]
    fn test_bare_file_name_accepted() {
        assert!(validate_config("info", &Some("gaming_room.log".to_string())).is_ok());
    }

    #[test]
    fn test_missing_log_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");
        let log_path = log_dir.join("gaming_room.log").to_string_lossy().to_string();

        assert!(validate_config("info", &Some(log_path)).is_ok());
        assert!(log_dir.exists());
    }
}
