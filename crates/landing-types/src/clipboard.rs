//! Copy-to-clipboard flow and button feedback
//!
//! The browser side tries the async clipboard first and falls back to a
//! hidden textarea + `execCommand("copy")`. This module holds the decisions
//! that do not need a DOM: which path runs next, and what a button shows
//! while feedback is up.

use crate::config::CopyFeedbackConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// `navigator.clipboard.writeText`
    AsyncClipboard,
    /// Off-screen textarea, select, `execCommand("copy")`
    SelectionFallback,
}

/// Where a copy attempt goes after `method` finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStep {
    Try(CopyMethod),
    ShowFeedback,
    /// Every path failed; ask the user to copy by hand
    ManualPrompt(String),
}

/// First method to try given whether `navigator.clipboard` exists.
pub fn first_method(has_async_clipboard: bool) -> CopyMethod {
    if has_async_clipboard {
        CopyMethod::AsyncClipboard
    } else {
        CopyMethod::SelectionFallback
    }
}

/// Next step after `method` succeeded or failed.
pub fn next_step(
    method: CopyMethod,
    succeeded: bool,
    text: &str,
    config: &CopyFeedbackConfig,
) -> CopyStep {
    match (method, succeeded) {
        (_, true) => CopyStep::ShowFeedback,
        (CopyMethod::AsyncClipboard, false) => CopyStep::Try(CopyMethod::SelectionFallback),
        (CopyMethod::SelectionFallback, false) => {
            CopyStep::ManualPrompt(manual_prompt(text, config))
        }
    }
}

/// Run synchronous attempts from `step` until it leaves `Try`. `attempt`
/// reports whether `method` copied the text.
pub fn settle<F>(
    mut step: CopyStep,
    text: &str,
    config: &CopyFeedbackConfig,
    mut attempt: F,
) -> CopyStep
where
    F: FnMut(CopyMethod) -> bool,
{
    while let CopyStep::Try(method) = step {
        step = next_step(method, attempt(method), text, config);
    }
    step
}

pub fn manual_prompt(text: &str, config: &CopyFeedbackConfig) -> String {
    format!("{}{}", config.manual_prompt, text)
}

/// Label swap for one feedback window.
///
/// The original label is whatever the button shows when feedback starts.
/// Two copies inside one window therefore restore to the feedback label on
/// the second timer; windows are not merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    original_label: String,
}

impl CopyFeedback {
    pub fn begin(current_label: impl Into<String>) -> Self {
        Self {
            original_label: current_label.into(),
        }
    }

    /// Label and background while feedback is showing.
    pub fn active<'c>(&self, config: &'c CopyFeedbackConfig) -> (&'c str, &'c str) {
        (&config.label, &config.background)
    }

    /// Label to restore when the window ends; the background is cleared.
    pub fn restore_label(&self) -> &str {
        &self.original_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_method_follows_capability() {
        assert_eq!(first_method(true), CopyMethod::AsyncClipboard);
        assert_eq!(first_method(false), CopyMethod::SelectionFallback);
    }

    #[test]
    fn async_failure_falls_back_once() {
        let cfg = CopyFeedbackConfig::default();
        assert_eq!(
            next_step(CopyMethod::AsyncClipboard, false, "abc", &cfg),
            CopyStep::Try(CopyMethod::SelectionFallback)
        );
        assert_eq!(
            next_step(CopyMethod::SelectionFallback, false, "abc", &cfg),
            CopyStep::ManualPrompt("Failed to copy. Please copy manually: abc".into())
        );
    }

    #[test]
    fn any_success_shows_feedback() {
        let cfg = CopyFeedbackConfig::default();
        for method in [CopyMethod::AsyncClipboard, CopyMethod::SelectionFallback] {
            assert_eq!(next_step(method, true, "abc", &cfg), CopyStep::ShowFeedback);
        }
    }

    #[test]
    fn settle_falls_back_after_async_failure() {
        let cfg = CopyFeedbackConfig::default();
        let mut tried = Vec::new();
        let step = settle(CopyStep::Try(first_method(true)), "abc", &cfg, |m| {
            tried.push(m);
            m == CopyMethod::SelectionFallback
        });
        assert_eq!(step, CopyStep::ShowFeedback);
        assert_eq!(
            tried,
            vec![CopyMethod::AsyncClipboard, CopyMethod::SelectionFallback]
        );
    }

    #[test]
    fn settle_without_async_clipboard_tries_fallback_only() {
        let cfg = CopyFeedbackConfig::default();
        let mut tried = Vec::new();
        let step = settle(CopyStep::Try(first_method(false)), "abc", &cfg, |m| {
            tried.push(m);
            true
        });
        assert_eq!(step, CopyStep::ShowFeedback);
        assert_eq!(tried, vec![CopyMethod::SelectionFallback]);
    }

    #[test]
    fn settle_prompts_when_every_path_fails() {
        let cfg = CopyFeedbackConfig::default();
        let step = settle(CopyStep::Try(CopyMethod::AsyncClipboard), "abc", &cfg, |_| false);
        assert_eq!(
            step,
            CopyStep::ManualPrompt("Failed to copy. Please copy manually: abc".into())
        );
    }

    #[test]
    fn settle_leaves_final_steps_alone() {
        let cfg = CopyFeedbackConfig::default();
        let step = settle(CopyStep::ShowFeedback, "abc", &cfg, |_| unreachable!());
        assert_eq!(step, CopyStep::ShowFeedback);
    }

    #[test]
    fn feedback_swaps_and_restores_label() {
        let cfg = CopyFeedbackConfig::default();
        let fb = CopyFeedback::begin("Copy IP");
        assert_eq!(fb.active(&cfg), ("Copied!", "#3fb950"));
        assert_eq!(fb.restore_label(), "Copy IP");
    }

    #[test]
    fn second_copy_inside_window_captures_feedback_label() {
        let cfg = CopyFeedbackConfig::default();
        let first = CopyFeedback::begin("Copy IP");
        let (shown, _) = first.active(&cfg);
        let second = CopyFeedback::begin(shown);
        assert_eq!(first.restore_label(), "Copy IP");
        assert_eq!(second.restore_label(), "Copied!");
    }
}
