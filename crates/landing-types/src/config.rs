//! Site configuration
//!
//! Tunables for every page behavior live in `config/site.yaml`, embedded at
//! compile time. Use [`global_config()`] from the UI layer; tests build a
//! [`SiteConfig`] directly.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::error;

use crate::error::SiteError;

const EMBEDDED_CONFIG: &str = include_str!("../config/site.yaml");

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Parsed, process-wide config. Falls back to defaults if the embedded YAML
/// does not parse.
pub fn global_config() -> &'static SiteConfig {
    CONFIG.get_or_init(|| {
        SiteConfig::from_yaml(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            error!("embedded site config invalid, using defaults: {}", e);
            SiteConfig::default()
        })
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub player_count: PlayerCountConfig,
    pub copy_feedback: CopyFeedbackConfig,
    pub navbar: NavbarConfig,
    pub reveal: RevealConfig,
    pub navigation: NavigationConfig,
}

impl SiteConfig {
    pub fn from_yaml(source: &str) -> Result<Self, SiteError> {
        serde_yaml::from_str(source).map_err(|e| SiteError::Config(e.to_string()))
    }
}

// =============================================================================
// PLAYER COUNT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerCountConfig {
    /// Status endpoint (GET, JSON)
    pub endpoint: String,
    /// Id of the element that displays the count
    pub element_id: String,
    pub interval_ms: u32,
    /// Shown as the max when the server reports none
    pub default_max: u32,
    pub unavailable_label: String,
}

impl Default for PlayerCountConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://servers-frontend.fivem.net/api/servers/single/bj3858".to_string(),
            element_id: "player-count".to_string(),
            interval_ms: 30_000,
            default_max: 128,
            unavailable_label: "N/A".to_string(),
        }
    }
}

// =============================================================================
// COPY FEEDBACK
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CopyFeedbackConfig {
    pub label: String,
    pub background: String,
    pub duration_ms: u32,
    /// Prefix of the alert shown when every copy path fails
    pub manual_prompt: String,
}

impl Default for CopyFeedbackConfig {
    fn default() -> Self {
        Self {
            label: "Copied!".to_string(),
            background: "#3fb950".to_string(),
            duration_ms: 2000,
            manual_prompt: "Failed to copy. Please copy manually: ".to_string(),
        }
    }
}

// =============================================================================
// NAVBAR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub shadow: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: ".navbar".to_string(),
            shadow: "0 2px 10px rgba(0, 0, 0, 0.3)".to_string(),
        }
    }
}

// =============================================================================
// REVEAL ANIMATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Class selectors of the card-like elements that fade in
    pub selectors: Vec<String>,
    pub hidden_opacity: String,
    pub hidden_transform: String,
    pub visible_opacity: String,
    pub visible_transform: String,
    pub transition: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealConfig {
    /// Single selector list suitable for `querySelectorAll`.
    pub fn query(&self) -> String {
        self.selectors.join(", ")
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".feature-card",
                ".rule-link-card",
                ".staff-card",
                ".update-card",
                ".link-card",
                ".join-media",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            hidden_opacity: "0".to_string(),
            hidden_transform: "translateY(20px)".to_string(),
            visible_opacity: "1".to_string(),
            visible_transform: "translateY(0)".to_string(),
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub link_selector: String,
    /// Same-page anchors that get smooth scrolling
    pub anchor_selector: String,
    pub active_class: String,
    pub index_page: String,
    pub home_page: String,
    /// Pages with a fixed nav entry, checked in order
    pub static_pages: Vec<String>,
    pub sections: SectionWatchConfig,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            link_selector: ".nav-menu a".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            active_class: "active".to_string(),
            index_page: "index.html".to_string(),
            home_page: "home.html".to_string(),
            static_pages: vec!["rules.html".to_string(), "staff.html".to_string()],
            sections: SectionWatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionWatchConfig {
    pub selector: String,
    pub thresholds: Vec<f64>,
    pub root_margin: String,
    /// A section must be strictly more visible than this to become active
    pub min_ratio: f64,
}

impl Default for SectionWatchConfig {
    fn default() -> Self {
        Self {
            selector: "section[id]".to_string(),
            thresholds: vec![0.1, 0.3, 0.5],
            root_margin: "-100px 0px -50% 0px".to_string(),
            min_ratio: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let parsed = SiteConfig::from_yaml(EMBEDDED_CONFIG).expect("embedded config parses");
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let cfg = SiteConfig::from_yaml("player_count:\n  interval_ms: 5000\n").unwrap();
        assert_eq!(cfg.player_count.interval_ms, 5000);
        assert_eq!(cfg.player_count.default_max, 128);
        assert_eq!(cfg.navbar, NavbarConfig::default());
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = SiteConfig::from_yaml("player_count: [unterminated").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn reveal_query_joins_selectors() {
        assert_eq!(
            RevealConfig::default().query(),
            ".feature-card, .rule-link-card, .staff-card, .update-card, .link-card, .join-media"
        );
    }

    #[test]
    fn global_config_is_stable() {
        assert!(std::ptr::eq(global_config(), global_config()));
        assert_eq!(global_config().copy_feedback.duration_ms, 2000);
    }
}
