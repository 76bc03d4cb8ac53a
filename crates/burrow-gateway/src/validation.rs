use crate::error::{AppError, Result};

/// Validates that the URL has a valid format (http(s) scheme and a host).
pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(AppError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if url.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidUrl(format!(
            "URL must not contain whitespace: {}",
            url
        )));
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(AppError::InvalidUrl(format!(
            "URL must have a valid scheme and host: {}",
            url
        )));
    };

    let scheme = scheme.to_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(AppError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            scheme
        )));
    }

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(AppError::InvalidUrl(format!("URL has no host: {}", url)));
    }

    Ok(())
}
