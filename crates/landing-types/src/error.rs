use thiserror::Error;

/// Failures inside page logic. None of them are fatal to the page; each one
/// degrades a single affordance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("config: {0}")]
    Config(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("decode: {0}")]
    Decode(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("js: {0}")]
    Js(String),
}

impl SiteError {
    /// Transport and decode failures are retried on the next poll; the rest
    /// are structural.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Decode(_) | Self::Js(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        assert_eq!(SiteError::Http { status: 503 }.to_string(), "HTTP 503");
    }

    #[test]
    fn display_missing_element() {
        let e = SiteError::MissingElement("#player-count".into());
        assert_eq!(e.to_string(), "element not found: #player-count");
    }

    #[test]
    fn transient_classification() {
        assert!(SiteError::Http { status: 500 }.is_transient());
        assert!(SiteError::Decode("eof".into()).is_transient());
        assert!(SiteError::Js("TypeError".into()).is_transient());
        assert!(!SiteError::Config("bad".into()).is_transient());
        assert!(!SiteError::MissingElement("x".into()).is_transient());
    }
}
