//! Player count poller: one refresh now, then one per interval

use gloo_timers::callback::Interval;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;

use crate::api::StatusClient;
use crate::controller::PageController;
use crate::error::UiResult;

pub fn install(page: &PageController) -> UiResult<()> {
    let config = &page.config().player_count;
    let client = StatusClient::new(&config.endpoint);

    refresh(page, &client);

    let timer_page = page.clone();
    let interval = Interval::new(config.interval_ms, move || refresh(&timer_page, &client));
    page.state_mut().poll_timer = Some(interval);

    debug!(interval_ms = config.interval_ms, "player count polling");
    Ok(())
}

fn refresh(page: &PageController, client: &StatusClient) {
    let element_id = &page.config().player_count.element_id;
    let display = page.document().get_element_by_id(element_id);

    {
        let mut state = page.state_mut();
        if !state.poller.begin(display.is_some()) {
            return;
        }
        debug!(
            cycle = state.poller.cycles(),
            state = ?state.poller.state(),
            "player count poll"
        );
    }
    let Some(display) = display else {
        return;
    };

    let page = page.clone();
    let client = client.clone();
    spawn_local(async move {
        let outcome = client.fetch().await;
        let text = {
            let mut state = page.state_mut();
            let text = state.poller.complete(outcome);
            debug!(state = ?state.poller.state(), %text, "player count updated");
            text
        };
        display.set_text_content(Some(&text));
    });
}
