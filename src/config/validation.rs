use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Input size limit must be positive
/// - Highlight thresholds must be finite and non-negative, moderate <= strong
/// - If log file path or output directory is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Alias names and targets cannot be empty
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.max_input_bytes == 0 {
        return Err(AppError::config_error(
            "max_input_bytes must be greater than zero",
        ));
    }

    for (name, value) in [
        ("highlight_strong_gap", config.highlight_strong_gap),
        ("highlight_moderate_gap", config.highlight_moderate_gap),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::config_error(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }
    }

    if config.highlight_moderate_gap > config.highlight_strong_gap {
        return Err(AppError::config_error(format!(
            "highlight_moderate_gap ({}) cannot exceed highlight_strong_gap ({})",
            config.highlight_moderate_gap, config.highlight_strong_gap
        )));
    }

    if let Some(output_dir) = &config.output_dir
        && output_dir.trim().is_empty()
    {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
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

    if let Some((name, target)) = config
        .aliases
        .iter()
        .find(|(name, target)| name.trim().is_empty() || target.trim().is_empty())
    {
        return Err(AppError::config_error(format!(
            "Alias entries cannot be empty (got '{name}' -> '{target}')"
        )));
    }

    Ok(())
}
