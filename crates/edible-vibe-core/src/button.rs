//! Call-to-action button model
//!
//! The web crate renders these; everything that decides *what* a button
//! does or looks like lives here.

use crate::error::SiteError;
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

const BASE_CLASS: &str = "cta";

/// Button visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Brand orange fill (default)
    #[default]
    Primary,
    /// White fill, dark text
    Secondary,
    /// Transparent with a white border
    Outline,
}

impl ButtonVariant {
    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "cta--primary",
            ButtonVariant::Secondary => "cta--secondary",
            ButtonVariant::Outline => "cta--outline",
        }
    }

    /// Parse a variant name, falling back to `Primary` for anything unknown
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: SiteError| {
            warn!(variant = %name, error = %err, "Unknown button variant, using primary");
            ButtonVariant::Primary
        })
    }
}

impl FromStr for ButtonVariant {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ButtonVariant::Primary),
            "secondary" => Ok(ButtonVariant::Secondary),
            "outline" => Ok(ButtonVariant::Outline),
            _ => Err(SiteError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

/// What activating a button does
///
/// Chosen explicitly by the caller: a navigation button always carries a
/// route, an action button never navigates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "to", rename_all = "lowercase")]
pub enum ButtonTarget {
    /// Client-side navigation to an in-app route
    Navigate(Route),
    /// Generic action; the click handler is supplied by the caller
    #[default]
    Action,
}

impl ButtonTarget {
    pub fn navigate(route: Route) -> Self {
        ButtonTarget::Navigate(route)
    }

    /// Route this button navigates to, if any
    pub fn destination(&self) -> Option<&Route> {
        match self {
            ButtonTarget::Navigate(route) => Some(route),
            ButtonTarget::Action => None,
        }
    }
}

/// A labelled button as configured for the site (e.g. hero actions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    #[serde(default, deserialize_with = "lenient_variant")]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub target: ButtonTarget,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, variant: ButtonVariant, target: ButtonTarget) -> Self {
        Self {
            label: label.into(),
            variant,
            target,
        }
    }

    pub fn destination(&self) -> Option<&Route> {
        self.target.destination()
    }
}

/// Any variant value in config that is not a known name renders as primary
/// instead of failing the load (`null`, numbers and objects included)
fn lenient_variant<'de, D>(deserializer: D) -> Result<ButtonVariant, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some(name) => ButtonVariant::parse_or_default(name),
        None => {
            warn!(variant = %value, "Button variant is not a name, using primary");
            ButtonVariant::Primary
        }
    })
}

/// Compose the class list for a button
///
/// Base class, then variant class, then any caller classes. Empty caller
/// classes are skipped so the output never has trailing whitespace.
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("{} {}", BASE_CLASS, variant.class())
    } else {
        format!("{} {} {}", BASE_CLASS, variant.class(), extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_parse_known_variants() {
        assert_eq!("outline".parse::<ButtonVariant>().unwrap(), ButtonVariant::Outline);
        assert_eq!(" Secondary ".parse::<ButtonVariant>().unwrap(), ButtonVariant::Secondary);
    }

    #[test]
    fn test_unknown_variant_fails_closed() {
        assert!("ghost".parse::<ButtonVariant>().is_err());
        assert_eq!(ButtonVariant::parse_or_default("ghost"), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::parse_or_default(""), ButtonVariant::Primary);
        assert_eq!(
            button_class(ButtonVariant::parse_or_default("neon"), ""),
            "cta cta--primary"
        );
    }

    #[test]
    fn test_action_target_never_navigates() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
        ] {
            let cta = CallToAction::new("Subscribe", variant, ButtonTarget::Action);
            assert!(cta.destination().is_none(), "{}", variant.name());
        }
    }

    #[test]
    fn test_navigate_target_exposes_route() {
        let target = ButtonTarget::navigate(Route::parse("/episodes").unwrap());
        assert_eq!(target.destination().map(Route::as_str), Some("/episodes"));
    }

    #[test]
    fn test_button_class_composition() {
        assert_eq!(button_class(ButtonVariant::Outline, ""), "cta cta--outline");
        assert_eq!(
            button_class(ButtonVariant::Secondary, "  hero-cta "),
            "cta cta--secondary hero-cta"
        );
    }

    #[test]
    fn test_call_to_action_from_config() {
        let cta: CallToAction = serde_json::from_str(
            r#"{"label":"Meet the Team","variant":"sparkly","target":{"kind":"navigate","to":"/team"}}"#,
        )
        .unwrap();
        assert_eq!(cta.variant, ButtonVariant::Primary);
        assert_eq!(cta.destination().map(Route::as_str), Some("/team"));

        let bare: CallToAction = serde_json::from_str(r#"{"label":"Play"}"#).unwrap();
        assert_eq!(bare.variant, ButtonVariant::Primary);
        assert_eq!(bare.target, ButtonTarget::Action);
    }

    #[test]
    fn test_non_string_variant_is_primary() {
        for raw in [
            r#"{"label":"Play","variant":null}"#,
            r#"{"label":"Play","variant":3}"#,
            r#"{"label":"Play","variant":{"name":"outline"}}"#,
        ] {
            let cta: CallToAction = serde_json::from_str(raw).unwrap();
            assert_eq!(cta.variant, ButtonVariant::Primary, "{raw}");
        }
    }

    #[test]
    fn test_target_serde_shape() {
        let json = serde_json::to_string(&ButtonTarget::navigate(Route::parse("/team").unwrap()))
            .unwrap();
        assert_eq!(json, r#"{"kind":"navigate","to":"/team"}"#);

        let action: ButtonTarget = serde_json::from_str(r#"{"kind":"action"}"#).unwrap();
        assert_eq!(action, ButtonTarget::Action);
    }
}
