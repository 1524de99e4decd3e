//! Behavior layer for a static portfolio page.
//!
//! The crate attaches event-driven behaviors to markup it does not render:
//! mobile menu, smooth anchor scrolling, visibility-triggered animations, a
//! typing hero title, a scroll-reactive navbar with parallax, contact-form
//! validation and iOS Safari workarounds. Each behavior is independent; they
//! share only the [`PageContext`] created once at startup.
//!
//! Entry points: [`start`] for Rust callers (the `main` binary uses it) and
//! `attachPageBehaviors(options)` for JavaScript hosts.

use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod animations;
pub mod anchors;
pub mod config;
pub mod context;
pub mod device;
pub mod dom;
pub mod error;
pub mod forms;
pub mod ios;
pub mod logging;
pub mod menu;
pub mod observe;
pub mod preloader;
pub mod scroll;
pub mod social;
pub mod timing;
pub mod touch;
pub mod typing;

pub use config::BehaviorConfig;
pub use context::PageContext;
pub use device::DeviceProfile;
pub use error::BehaviorError;

/// Attach every behavior to the current document.
///
/// Behaviors are wired independently: one that fails to attach is logged and
/// the rest still run.
pub fn attach_all(config: BehaviorConfig) -> Rc<PageContext> {
    let ctx = PageContext::new(DeviceProfile::detect(), config);

    error::log_failures([
        ("ios", ios::attach(&ctx)),
        ("anchors", anchors::attach()),
        ("scroll", scroll::attach(&ctx)),
        ("forms", forms::attach(&ctx)),
        ("menu", menu::attach(&ctx)),
        ("social", social::attach(&ctx)),
        ("preloader", preloader::attach(&ctx)),
    ]);
    animations::attach(&ctx);
    typing::attach(&ctx);
    log::info!("Page behaviors attached");
    ctx
}

/// Install logging and attach the behaviors once the DOM is parsed.
pub fn start(config: BehaviorConfig) -> Result<(), BehaviorError> {
    let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;
    window.document().ok_or(BehaviorError::NoDocument)?;
    config.validate()?;
    logging::init(config.level_filter()?);

    if dom::ready_state() != "loading" {
        attach_all(config);
        return Ok(());
    }

    let mut pending = Some(config);
    dom::listen(&gloo_utils::document(), "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            attach_all(config);
        }
    })
}

/// JavaScript entry point. `options` is an optional object whose fields
/// override [`BehaviorConfig`] (camelCase names).
#[wasm_bindgen(js_name = attachPageBehaviors)]
pub fn attach_page_behaviors(options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = BehaviorConfig::from_js(options)?;
    start(config).map_err(|e| {
        log::error!("{}", e);
        JsValue::from(e)
    })
}
