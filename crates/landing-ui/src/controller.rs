//! Page controller
//!
//! One controller per loaded document. It owns the mutable page state
//! (last scroll offset, poll cycle, lazily created section watcher, timers)
//! and hands cheap clones of itself to event closures. Nothing is torn
//! down; the controller lives as long as the page.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use landing_types::{global_config, PlayerCountPoller, ScrollTracker, SiteConfig};
use tracing::{error, info};
use web_sys::Document;

use crate::active_nav::{self, SectionWatcher};
use crate::dom;
use crate::effects::{self, RevealWatcher};
use crate::error::UiResult;
use crate::{globals, player_count, smooth_scroll};

thread_local! {
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

pub struct PageState {
    pub scroll: ScrollTracker,
    pub poller: PlayerCountPoller,
    pub poll_timer: Option<Interval>,
    pub section_watcher: Option<SectionWatcher>,
    pub reveal_watcher: Option<RevealWatcher>,
}

#[derive(Clone)]
pub struct PageController {
    config: &'static SiteConfig,
    document: Document,
    state: Rc<RefCell<PageState>>,
}

impl PageController {
    pub fn new(config: &'static SiteConfig, document: Document) -> Self {
        let state = PageState {
            scroll: ScrollTracker::default(),
            poller: PlayerCountPoller::new(&config.player_count),
            poll_timer: None,
            section_watcher: None,
            reveal_watcher: None,
        };
        Self {
            config,
            document,
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Build the controller for the current document and wire every
    /// behavior. A second call is a no-op.
    pub fn boot() -> UiResult<()> {
        if PAGE.with(|page| page.borrow().is_some()) {
            info!("page controller already running");
            return Ok(());
        }

        let page = Self::new(global_config(), dom::document()?);
        page.install();
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
        Ok(())
    }

    pub fn config(&self) -> &'static SiteConfig {
        self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> Ref<'_, PageState> {
        self.state.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, PageState> {
        self.state.borrow_mut()
    }

    /// Components initialize independently; one failing leaves the rest
    /// running.
    fn install(&self) {
        let results = [
            ("globals", globals::install(self)),
            ("smooth-scroll", smooth_scroll::install(self)),
            ("player-count", player_count::install(self)),
            ("navbar-shadow", effects::install_navbar_shadow(self)),
            ("reveal", effects::install_reveal(self)),
            ("active-nav", active_nav::install(self)),
        ];

        for (component, result) in results {
            match result {
                Ok(()) => info!(component, "installed"),
                Err(e) => error!(component, "install failed: {}", e),
            }
        }
    }
}
