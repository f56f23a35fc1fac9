//! Player count status decoding
//!
//! The server browser API answers in one of two shapes:
//!
//! ```text
//! { "Data": { "clients": 42, "sv_maxclients": 100, ... }, ... }
//! { "clients": 42, "sv_maxclients": 100, ... }
//! ```
//!
//! A count that is absent or zero in the nested object falls through to the
//! top-level one, then to the default (0 players, configured max). Any JSON
//! value other than `null` is accepted: a body or `Data` that is not an
//! object simply has no counts.

use std::fmt;

use serde_json::Value;

use crate::error::SiteError;

/// Counts as reported by one of the two response shapes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerCounts {
    pub clients: Option<u32>,
    pub sv_maxclients: Option<u32>,
}

impl ServerCounts {
    fn from_value(value: &Value) -> Self {
        Self {
            clients: value.get("clients").and_then(count_from_value),
            sv_maxclients: value.get("sv_maxclients").and_then(count_from_value),
        }
    }
}

/// Status body. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerStatusResponse {
    pub data: Option<ServerCounts>,
    pub top_level: ServerCounts,
}

impl ServerStatusResponse {
    pub fn from_json(body: &str) -> Result<Self, SiteError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| SiteError::Decode(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Only `null` is rejected; property access on it has no fallback.
    pub fn from_value(value: &Value) -> Result<Self, SiteError> {
        if value.is_null() {
            return Err(SiteError::Decode("status body is null".into()));
        }
        Ok(Self {
            data: value
                .get("Data")
                .filter(|d| d.is_object())
                .map(ServerCounts::from_value),
            top_level: ServerCounts::from_value(value),
        })
    }

    /// Resolve the displayed counts, `default_max` filling a missing max.
    pub fn player_count(&self, default_max: u32) -> PlayerCount {
        let nested = self.data.as_ref();
        let pick = |field: fn(&ServerCounts) -> Option<u32>| {
            nested
                .and_then(field)
                .filter(|n| *n != 0)
                .or_else(|| field(&self.top_level).filter(|n| *n != 0))
        };

        PlayerCount {
            current: pick(|c| c.clients).unwrap_or(0),
            max: pick(|c| c.sv_maxclients).unwrap_or(default_max),
        }
    }
}

/// Accepts integers, integral floats and numeric strings. Anything else
/// (negative, fractional, null, objects) reads as absent rather than failing
/// the whole body.
fn count_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).ok()
            } else {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f as u32)
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCount {
    pub current: u32,
    pub max: u32,
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// What the player count element shows after a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCountStatus {
    Available(PlayerCount),
    Unavailable,
}

impl PlayerCountStatus {
    /// Text for the display element.
    pub fn render(&self, unavailable_label: &str) -> String {
        match self {
            Self::Available(count) => count.to_string(),
            Self::Unavailable => unavailable_label.to_string(),
        }
    }

    /// Decode a successful (2xx) response body.
    pub fn from_body(body: &str, default_max: u32) -> Result<Self, SiteError> {
        let response = ServerStatusResponse::from_json(body)?;
        Ok(Self::Available(response.player_count(default_max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(body: &str) -> PlayerCount {
        ServerStatusResponse::from_json(body)
            .expect("valid body")
            .player_count(128)
    }

    #[test]
    fn nested_shape() {
        assert_eq!(
            count(r#"{"Data":{"clients":42,"sv_maxclients":100}}"#),
            PlayerCount { current: 42, max: 100 }
        );
    }

    #[test]
    fn top_level_shape() {
        assert_eq!(
            count(r#"{"clients":7,"sv_maxclients":64}"#),
            PlayerCount { current: 7, max: 64 }
        );
    }

    #[test]
    fn defaults_when_absent() {
        assert_eq!(count("{}"), PlayerCount { current: 0, max: 128 });
    }

    #[test]
    fn zero_in_nested_falls_through_to_top_level() {
        assert_eq!(
            count(r#"{"Data":{"clients":0,"sv_maxclients":0},"clients":3,"sv_maxclients":32}"#),
            PlayerCount { current: 3, max: 32 }
        );
    }

    #[test]
    fn zero_max_everywhere_uses_default() {
        assert_eq!(
            count(r#"{"clients":9,"sv_maxclients":0}"#),
            PlayerCount { current: 9, max: 128 }
        );
    }

    #[test]
    fn numeric_strings_and_integral_floats() {
        assert_eq!(
            count(r#"{"Data":{"clients":"12","sv_maxclients":48.0}}"#),
            PlayerCount { current: 12, max: 48 }
        );
    }

    #[test]
    fn junk_counts_read_as_absent() {
        assert_eq!(
            count(r#"{"Data":{"clients":-4,"sv_maxclients":"lots"},"clients":null}"#),
            PlayerCount { current: 0, max: 128 }
        );
    }

    #[test]
    fn unrelated_fields_ignored() {
        assert_eq!(
            count(
                r#"{"EndPoint":"bj3858","Data":{"hostname":"x","clients":1,"sv_maxclients":2,"vars":{}}}"#
            ),
            PlayerCount { current: 1, max: 2 }
        );
    }

    #[test]
    fn null_and_malformed_bodies_are_decode_errors() {
        assert!(matches!(
            PlayerCountStatus::from_body("null", 128),
            Err(SiteError::Decode(_))
        ));
        assert!(matches!(
            PlayerCountStatus::from_body("<html>", 128),
            Err(SiteError::Decode(_))
        ));
    }

    #[test]
    fn non_object_bodies_have_no_counts() {
        for body in ["[]", "42", "true", r#""up""#] {
            assert_eq!(count(body), PlayerCount { current: 0, max: 128 }, "{}", body);
        }
    }

    #[test]
    fn non_object_data_falls_through_to_top_level() {
        assert_eq!(count(r#"{"Data":"x","clients":5}"#), PlayerCount { current: 5, max: 128 });
        assert_eq!(
            count(r#"{"Data":7,"clients":5,"sv_maxclients":64}"#),
            PlayerCount { current: 5, max: 64 }
        );
        assert_eq!(
            count(r#"{"Data":[1,2],"clients":3}"#),
            PlayerCount { current: 3, max: 128 }
        );
    }

    #[test]
    fn null_data_falls_through_to_top_level() {
        assert_eq!(
            count(r#"{"Data":null,"clients":2,"sv_maxclients":10}"#),
            PlayerCount { current: 2, max: 10 }
        );
    }

    #[test]
    fn render_labels() {
        let ok = PlayerCountStatus::Available(PlayerCount { current: 5, max: 128 });
        assert_eq!(ok.render("N/A"), "5/128");
        assert_eq!(PlayerCountStatus::Unavailable.render("N/A"), "N/A");
    }
}
