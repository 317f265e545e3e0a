//! Validators for interactive input

use std::path::Path;

use super::models::Kubeconfig;

/// Type of a prompt validator: `Err` carries the message shown to the user
pub type ValidationResult = std::result::Result<(), String>;

/// Input must not be blank
pub fn required(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return Err("a value is required".to_string());
    }
    Ok(())
}

/// A name for a new context: non-blank and not already used
pub fn new_context_name(config: &Kubeconfig, input: &str) -> ValidationResult {
    required(input)?;
    if input.trim() != input {
        return Err("context names cannot start or end with whitespace".to_string());
    }
    if config.has_context(input) {
        return Err(format!("a context with name '{}' already exists", input));
    }
    Ok(())
}

/// An API server URL (http or https, with a host)
pub fn server_url(input: &str) -> ValidationResult {
    required(input)?;
    let url = reqwest::Url::parse(input.trim())
        .map_err(|e| format!("'{}' is not a valid URL: {}", input, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "'{}' must use the http or https scheme, got '{}'",
            input,
            url.scheme()
        ));
    }
    if url.host_str().is_none() {
        return Err(format!("'{}' has no host", input));
    }
    Ok(())
}

/// A path to a file that exists
pub fn existing_file(input: &str) -> ValidationResult {
    required(input)?;
    if !Path::new(input.trim()).is_file() {
        return Err(format!("could not find a file with name '{}'", input));
    }
    Ok(())
}

/// Either blank, or a path to a file that exists
pub fn optional_file(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        return Ok(());
    }
    existing_file(input)
}
