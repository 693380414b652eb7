//! Site configuration
//!
//! Static content the components render: branding, navigation, social links
//! and hero copy. A default `site.json` ships embedded in the binary; a
//! malformed config never breaks rendering. Bad nav entries and hero actions
//! are dropped one by one; only a document that cannot be read at all falls
//! back to built-in defaults.

use crate::button::{ButtonTarget, ButtonVariant, CallToAction};
use crate::error::SiteError;
use crate::nav::NavItem;
use crate::social::SocialLinks;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

const EMBEDDED_SITE_CONFIG: &str = include_str!("../site.json");

/// Hero banner content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub headline: String,
    pub subheading: String,
    /// Background video (mp4)
    pub video_url: String,
    pub actions: Vec<CallToAction>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Where Flavors Meet Fun and the Road".to_string(),
            subheading: "Experience the perfect blend of culinary artistry, automotive excellence, and entertainment that drives your senses.".to_string(),
            video_url: "https://player.vimeo.com/external/459389137.hd.mp4?s=865d2765c437e25f9f31f16b18d1d8778e64c711".to_string(),
            actions: vec![
                CallToAction::new(
                    "Watch Episodes",
                    ButtonVariant::Primary,
                    ButtonTarget::Navigate(NavItem::Episodes.route()),
                ),
                CallToAction::new(
                    "Meet the Team",
                    ButtonVariant::Outline,
                    ButtonTarget::Navigate(NavItem::Team.route()),
                ),
                CallToAction::new(
                    "Join the Vibe",
                    ButtonVariant::Secondary,
                    ButtonTarget::Navigate(NavItem::Contact.route()),
                ),
            ],
        }
    }
}

impl HeroContent {
    /// Headline split into words for the staggered reveal
    pub fn headline_words(&self) -> Vec<&str> {
        self.headline.split_whitespace().collect()
    }
}

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name shown in the header
    pub brand: String,
    /// Primary navigation, in display order
    pub nav: Vec<NavItem>,
    pub social: SocialLinks,
    pub hero: HeroContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Edible Vibe".to_string(),
            nav: NavItem::ALL.to_vec(),
            social: SocialLinks {
                youtube: Some("https://youtube.com/@ediblevibe".to_string()),
                instagram: Some("https://instagram.com/ediblevibe".to_string()),
                twitter: Some("https://twitter.com/ediblevibe".to_string()),
            },
            hero: HeroContent::default(),
        }
    }
}

/// A parsed config plus everything that was ignored or defaulted on the way
#[derive(Debug)]
pub struct ConfigReport {
    pub config: SiteConfig,
    pub issues: Vec<SiteError>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl SiteConfig {
    /// Parse a config document, dropping individual malformed entries
    ///
    /// Fails only when the document is not JSON or a top-level field has the
    /// wrong shape.
    pub fn parse(raw: &str) -> Result<ConfigReport, SiteError> {
        let mut doc: Value = serde_json::from_str(raw).map_err(parse_error)?;
        let mut issues = Vec::new();

        if let Some(nav) = doc.get_mut("nav").and_then(Value::as_array_mut) {
            retain_valid::<NavItem>(nav, "nav", &mut issues);
        }
        if let Some(actions) = doc.pointer_mut("/hero/actions").and_then(Value::as_array_mut) {
            retain_valid::<CallToAction>(actions, "hero.actions", &mut issues);
            issues.extend(actions.iter().filter_map(unknown_variant));
        }

        let config: SiteConfig = serde_json::from_value(doc).map_err(parse_error)?;
        issues.extend(config.social.issues());

        for issue in &issues {
            warn!(kind = issue.kind(), error = %issue, "Site config entry ignored");
        }
        Ok(ConfigReport { config, issues })
    }

    /// Parse a config document
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Self::parse(raw).map(|report| report.config)
    }

    /// Parse a config document, falling back to built-in defaults when it
    /// cannot be read at all
    pub fn parse_or_default(raw: &str) -> ConfigReport {
        match Self::parse(raw) {
            Ok(report) => report,
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "Invalid site config, using defaults");
                ConfigReport {
                    config: Self::default(),
                    issues: vec![err],
                }
            }
        }
    }

    pub fn from_json_or_default(raw: &str) -> Self {
        Self::parse_or_default(raw).config
    }

    /// The config compiled into the binary, with its issues
    pub fn embedded_report() -> ConfigReport {
        let report = Self::parse_or_default(EMBEDDED_SITE_CONFIG);
        debug!(
            brand = %report.config.brand,
            nav_items = report.config.nav.len(),
            issues = report.issues.len(),
            "Site config loaded"
        );
        report
    }

    /// The config compiled into the binary
    pub fn embedded() -> Self {
        Self::embedded_report().config
    }

    /// Load a config file from disk (tooling and tests; the browser uses [`embedded`](Self::embedded))
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| SiteError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
            .with_context(|| format!("Failed to load site config from {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid site config in {}", path.display()))
    }
}

fn parse_error(source: serde_json::Error) -> SiteError {
    SiteError::ConfigParse {
        message: source.to_string(),
        source,
    }
}

/// Drop list entries that do not deserialize as `T`, recording each one
fn retain_valid<T: DeserializeOwned>(
    entries: &mut Vec<Value>,
    field: &'static str,
    issues: &mut Vec<SiteError>,
) {
    let mut index = 0;
    entries.retain(|entry| {
        let kept = match T::deserialize(entry) {
            Ok(_) => true,
            Err(err) => {
                issues.push(SiteError::InvalidEntry {
                    field,
                    index,
                    message: err.to_string(),
                });
                false
            }
        };
        index += 1;
        kept
    });
}

/// Hero action whose variant will render as primary because it is not a known name
fn unknown_variant(action: &Value) -> Option<SiteError> {
    let variant = action.get("variant")?;
    match variant.as_str() {
        Some(name) if name.parse::<ButtonVariant>().is_ok() => None,
        Some(name) => Some(SiteError::UnknownVariant {
            name: name.to_string(),
        }),
        None => Some(SiteError::UnknownVariant {
            name: variant.to_string(),
        }),
    }
}
