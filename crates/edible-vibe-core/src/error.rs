//! Error types for edible-vibe-core
//!
//! Every error here describes malformed configuration. Rendering code never
//! propagates them; it falls back to a default and logs instead.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for site configuration
#[derive(Error, Debug)]
pub enum SiteError {
    // ===================
    // Routing Errors
    // ===================
    #[error("Invalid route '{path}': {reason}")]
    InvalidRoute { path: String, reason: &'static str },

    // ===================
    // Presentation Errors
    // ===================
    #[error("Unknown button variant: {name}")]
    UnknownVariant { name: String },

    #[error("Invalid social link for {platform}: {url}")]
    InvalidSocialUrl { platform: &'static str, url: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to parse site config: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Ignored {field}[{index}]: {message}")]
    InvalidEntry {
        field: &'static str,
        index: usize,
        message: String,
    },

    #[error("Failed to read site config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    /// Short machine-friendly category, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            SiteError::InvalidRoute { .. } => "route",
            SiteError::UnknownVariant { .. } => "variant",
            SiteError::InvalidSocialUrl { .. } => "social",
            SiteError::InvalidEntry { .. } => "entry",
            SiteError::ConfigParse { .. } | SiteError::ConfigRead { .. } => "config",
        }
    }
}
