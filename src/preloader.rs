use crate::context::PageContext;
use crate::dom::{self, listen, set_style};
use crate::error::BehaviorError;
use gloo_timers::callback::Timeout;
use std::rc::Rc;

fn fade_out(fade_ms: u32) {
    let Some(preloader) = dom::query_html(".preloader") else {
        return;
    };
    set_style(&preloader, "opacity", "0");
    Timeout::new(fade_ms, move || set_style(&preloader, "display", "none")).forget();
}

/// Hide `.preloader` once the page has fully loaded.
pub fn attach(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    let fade_ms = ctx.config.preloader_fade_ms;
    // The module may initialise after `load` already fired.
    if dom::ready_state() == "complete" {
        fade_out(fade_ms);
        return Ok(());
    }
    listen(&gloo_utils::window(), "load", move |_| fade_out(fade_ms))
}
