//! Player count poll cycle
//!
//! `Idle -> Fetching -> Idle`, once at startup and then on a fixed interval.
//! The UI layer owns the timer and the HTTP call; this type decides what a
//! finished fetch renders. Cycles are never cancelled and may overlap, so
//! the state stays `Fetching` while any request is in flight.

use tracing::{debug, error, warn};

use crate::config::PlayerCountConfig;
use crate::error::SiteError;
use crate::status::PlayerCountStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
}

/// Outcome of one HTTP round trip, before decoding
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx with the raw body
    Body(String),
    /// Non-2xx status
    Status(u16),
    /// Network or promise failure
    Failed(SiteError),
}

#[derive(Debug, Clone)]
pub struct PlayerCountPoller {
    default_max: u32,
    unavailable_label: String,
    in_flight: u32,
    cycles: u64,
}

impl PlayerCountPoller {
    pub fn new(config: &PlayerCountConfig) -> Self {
        Self {
            default_max: config.default_max,
            unavailable_label: config.unavailable_label.clone(),
            in_flight: 0,
            cycles: 0,
        }
    }

    pub fn state(&self) -> PollState {
        if self.in_flight == 0 {
            PollState::Idle
        } else {
            PollState::Fetching
        }
    }

    /// Number of cycles that reached the network.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Enter `Fetching`. `display_present` is the entry check on the target
    /// element; without it the cycle is a no-op and `false` is returned.
    pub fn begin(&mut self, display_present: bool) -> bool {
        if !display_present {
            debug!("player count element absent, skipping poll");
            return false;
        }
        self.in_flight += 1;
        self.cycles += 1;
        true
    }

    /// Leave `Fetching` and produce the text to render.
    pub fn complete(&mut self, outcome: FetchOutcome) -> String {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.resolve(outcome).render(&self.unavailable_label)
    }

    fn resolve(&self, outcome: FetchOutcome) -> PlayerCountStatus {
        let result = match outcome {
            FetchOutcome::Body(body) => PlayerCountStatus::from_body(&body, self.default_max),
            FetchOutcome::Status(status) => Err(SiteError::Http { status }),
            FetchOutcome::Failed(err) => Err(err),
        };

        result.unwrap_or_else(|err| {
            if err.is_transient() {
                warn!("Error fetching player count: {}", err);
            } else {
                error!("Error fetching player count: {}", err);
            }
            PlayerCountStatus::Unavailable
        })
    }
}
