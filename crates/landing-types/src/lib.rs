//! Landing site page logic
//!
//! Everything the page controller decides without touching the DOM lives
//! here, so it builds for both the host (tests) and `wasm32`.
//!
//! ```text
//! ┌────────────────────┐  decisions  ┌────────────────────┐
//! │  landing-types     │ ──────────► │  landing-ui        │
//! │  (pure, tested)    │             │  (web-sys, DOM)    │
//! └────────────────────┘             └────────────────────┘
//! ```

pub mod clipboard;
pub mod config;
pub mod effects;
pub mod error;
pub mod nav;
pub mod poller;
pub mod sections;
pub mod status;

pub use clipboard::{first_method, next_step, settle, CopyFeedback, CopyMethod, CopyStep};
pub use config::{global_config, SiteConfig};
pub use effects::{navbar_shadow, reveal_styles, RevealState, ScrollTracker};
pub use error::SiteError;
pub use nav::{active_links, anchor_target, link_matches, resolve_route, NavRoute, NavTarget};
pub use poller::{FetchOutcome, PlayerCountPoller, PollState};
pub use sections::{most_visible, SectionSample};
pub use status::{PlayerCount, PlayerCountStatus, ServerStatusResponse};
