//! In-app route paths

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated client-side route path (e.g. `/episodes`)
///
/// Only in-app paths are accepted: they start with a single `/`, carry no
/// scheme and contain no whitespace. External URLs belong in
/// [`SocialLinks`](crate::social::SocialLinks), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Route(String);

impl Route {
    /// Parse and validate a route path
    pub fn parse(path: impl Into<String>) -> Result<Self, SiteError> {
        let path = path.into();
        let path_part = path.split(['?', '#']).next().unwrap_or_default();
        let reason = if !path.starts_with('/') {
            Some("must start with '/'")
        } else if path.starts_with("//") {
            Some("protocol-relative URLs are not in-app routes")
        } else if path_part.contains("://") {
            Some("must not carry a scheme")
        } else if path.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SiteError::InvalidRoute { path, reason }),
            None => Ok(Self(path)),
        }
    }

    /// Site root
    pub fn home() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Route {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.0
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
