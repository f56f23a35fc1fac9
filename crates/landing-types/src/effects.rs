//! Scroll-driven cosmetics: navbar shadow and one-way reveal

use crate::config::{NavbarConfig, RevealConfig};

/// Shadow value for the navbar at vertical offset `offset`.
pub fn navbar_shadow(offset: f64, config: &NavbarConfig) -> &str {
    if offset <= 0.0 {
        "none"
    } else {
        &config.shadow
    }
}

/// Remembers the last scroll offset seen by the listener.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_scroll: f64,
}

impl ScrollTracker {
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    /// Record `offset` and return the shadow to apply.
    pub fn on_scroll<'c>(&mut self, offset: f64, config: &'c NavbarConfig) -> &'c str {
        self.last_scroll = offset;
        navbar_shadow(offset, config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Apply one intersection report. Returns true only on the
    /// hidden -> visible edge; visible elements stay visible.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (Self::Hidden, true) => {
                *self = Self::Visible;
                true
            }
            _ => false,
        }
    }
}

/// Inline style declarations for a reveal state, as `(property, value)`.
pub fn reveal_styles(state: RevealState, config: &RevealConfig) -> Vec<(&'static str, &str)> {
    match state {
        RevealState::Hidden => vec![
            ("opacity", config.hidden_opacity.as_str()),
            ("transform", config.hidden_transform.as_str()),
            ("transition", config.transition.as_str()),
        ],
        RevealState::Visible => vec![
            ("opacity", config.visible_opacity.as_str()),
            ("transform", config.visible_transform.as_str()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shadow_cleared_at_top() {
        let cfg = NavbarConfig::default();
        assert_eq!(navbar_shadow(0.0, &cfg), "none");
        assert_eq!(navbar_shadow(-12.0, &cfg), "none");
        assert_eq!(navbar_shadow(1.0, &cfg), "0 2px 10px rgba(0, 0, 0, 0.3)");
    }

    #[test]
    fn tracker_records_last_offset() {
        let cfg = NavbarConfig::default();
        let mut tracker = ScrollTracker::default();
        tracker.on_scroll(240.0, &cfg);
        assert_eq!(tracker.last_scroll(), 240.0);
        assert_eq!(tracker.on_scroll(0.0, &cfg), "none");
        assert_eq!(tracker.last_scroll(), 0.0);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Visible);
        assert!(!state.observe(true));
    }

    #[test]
    fn hidden_styles_include_transition() {
        let cfg = RevealConfig::default();
        let styles = reveal_styles(RevealState::Hidden, &cfg);
        assert!(styles.contains(&("transition", "opacity 0.6s ease, transform 0.6s ease")));
        assert!(styles.contains(&("opacity", "0")));
        let visible = reveal_styles(RevealState::Visible, &cfg);
        assert_eq!(visible, vec![("opacity", "1"), ("transform", "translateY(0)")]);
    }

    proptest! {
        #[test]
        fn shadow_depends_only_on_sign(offset in -1.0e6f64..1.0e6) {
            let cfg = NavbarConfig::default();
            let expected = if offset <= 0.0 { "none" } else { cfg.shadow.as_str() };
            prop_assert_eq!(navbar_shadow(offset, &cfg), expected);
        }

        #[test]
        fn reveal_never_rehides(reports in proptest::collection::vec(any::<bool>(), 0..32)) {
            let mut state = RevealState::default();
            let mut seen_visible = false;
            for r in reports {
                state.observe(r);
                seen_visible |= r;
                prop_assert_eq!(state == RevealState::Visible, seen_visible);
            }
        }
    }
}
