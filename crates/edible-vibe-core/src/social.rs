//! Social link configuration

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Supported social platforms, in header display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// Video channel (YouTube)
    Video,
    /// Photo feed (Instagram)
    Photo,
    /// Microblog (Twitter / X)
    Microblog,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Video,
        SocialPlatform::Photo,
        SocialPlatform::Microblog,
    ];

    /// Service name, used for labels and icon lookup
    pub fn service(self) -> &'static str {
        match self {
            SocialPlatform::Video => "YouTube",
            SocialPlatform::Photo => "Instagram",
            SocialPlatform::Microblog => "Twitter",
        }
    }
}

/// A resolved, renderable social link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Platform to URL mapping, as found in the site config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

impl SocialLinks {
    pub fn url_for(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Video => self.youtube.as_deref(),
            SocialPlatform::Photo => self.instagram.as_deref(),
            SocialPlatform::Microblog => self.twitter.as_deref(),
        }
    }

    /// Links to render, in display order
    ///
    /// Missing entries are skipped silently; malformed URLs are skipped with
    /// a warning. Never fails.
    pub fn links(&self) -> Vec<SocialLink> {
        self.resolve()
            .filter_map(|resolved| match resolved {
                Ok(link) => Some(link),
                Err(err) => {
                    warn!(error = %err, "Skipping social link");
                    None
                }
            })
            .collect()
    }

    /// Configured URLs that [`links`](Self::links) will omit
    pub fn issues(&self) -> Vec<SiteError> {
        self.resolve().filter_map(Result::err).collect()
    }

    fn resolve(&self) -> impl Iterator<Item = Result<SocialLink, SiteError>> + '_ {
        SocialPlatform::ALL.into_iter().filter_map(|platform| {
            let url = self.url_for(platform)?;
            Some(validate_url(platform, url).map(|()| SocialLink {
                platform,
                url: url.to_string(),
            }))
        })
    }
}

fn validate_url(platform: SocialPlatform, url: &str) -> Result<(), SiteError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    let host = rest.and_then(|r| r.split(['/', '?', '#']).next());
    match host {
        Some(host) if !host.is_empty() && !url.chars().any(char::is_whitespace) => Ok(()),
        _ => Err(SiteError::InvalidSocialUrl {
            platform: platform.service(),
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> SocialLinks {
        SocialLinks {
            youtube: Some("https://youtube.com/@ediblevibe".to_string()),
            instagram: Some("https://instagram.com/ediblevibe".to_string()),
            twitter: Some("https://twitter.com/ediblevibe".to_string()),
        }
    }

    #[test]
    fn test_links_in_display_order() {
        let platforms: Vec<_> = full().links().into_iter().map(|l| l.platform).collect();
        assert_eq!(platforms, SocialPlatform::ALL.to_vec());
    }

    #[test]
    fn test_missing_url_is_omitted() {
        let mut links = full();
        links.instagram = None;

        let rendered = links.links();
        assert_eq!(rendered.len(), 2);
        assert!(rendered.iter().all(|l| l.platform != SocialPlatform::Photo));
    }

    #[test]
    fn test_malformed_url_is_omitted() {
        let mut links = full();
        links.twitter = Some("twitter.com/ediblevibe".to_string());
        links.youtube = Some("https://".to_string());

        let rendered = links.links();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].platform, SocialPlatform::Photo);
    }

    #[test]
    fn test_issues_name_only_malformed_urls() {
        let mut links = full();
        links.instagram = None;
        links.twitter = Some("ftp://twitter.com/ev".to_string());

        let issues = links.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), "social");
        assert!(issues[0].to_string().contains("Twitter"));
        assert!(full().issues().is_empty());
    }

    #[test]
    fn test_empty_config_renders_nothing() {
        assert!(SocialLinks::default().links().is_empty());
    }

    #[test]
    fn test_partial_json() {
        let links: SocialLinks =
            serde_json::from_str(r#"{"youtube":"https://youtube.com/@ev"}"#).unwrap();
        assert_eq!(
            links.url_for(SocialPlatform::Video),
            Some("https://youtube.com/@ev")
        );
        assert_eq!(links.url_for(SocialPlatform::Microblog), None);
    }
}
