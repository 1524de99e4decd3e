//! iOS Safari workarounds: viewport lock, `--vh`, double-tap and input zoom,
//! momentum scrolling.

use crate::config::{IOS_INPUT_FONT_SIZE, IOS_VIEWPORT_CONTENT};
use crate::context::PageContext;
use crate::dom::{self, listen, set_style};
use crate::error::BehaviorError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

const SCROLLABLE_SELECTOR: &str = ".mobile-menu, .reviews-container, .users-container";
const FORM_CONTROL_SELECTOR: &str = "input, textarea, select";

/// Value for the `--vh` custom property: one percent of the viewport height.
pub fn vh_unit(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

fn set_vh() {
    let Some(height) = dom::viewport_height() else {
        return;
    };
    if let Ok(root) = gloo_utils::document_element().dyn_into::<HtmlElement>() {
        set_style(&root, "--vh", &vh_unit(height));
    }
}

fn lock_viewport() {
    if let Ok(Some(meta)) = gloo_utils::document().query_selector("meta[name=viewport]") {
        if let Err(e) = meta.set_attribute("content", IOS_VIEWPORT_CONTENT) {
            log::warn!("Could not rewrite viewport meta: {:?}", e);
        }
    }
}

fn attach_double_tap_guard(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    let ctx = ctx.clone();
    listen(&gloo_utils::document(), "touchend", move |e| {
        if ctx.touch.borrow_mut().on_touch_end(js_sys::Date::now()) {
            e.prevent_default();
        }
    })
}

fn attach_input_zoom_fix() -> Result<(), BehaviorError> {
    for control in dom::query_html_all(FORM_CONTROL_SELECTOR) {
        let is_file = control
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.type_() == "file")
            .unwrap_or(false);
        if is_file {
            continue;
        }
        let target = control.clone();
        listen(&control, "focus", move |_| {
            set_style(&target, "font-size", IOS_INPUT_FONT_SIZE);
        })?;
    }
    Ok(())
}

fn enable_momentum_scrolling() {
    for el in dom::query_html_all(SCROLLABLE_SELECTOR) {
        set_style(&el, "-webkit-overflow-scrolling", "touch");
    }
}

/// Apply every iOS fix. Does nothing on other platforms.
pub fn attach(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    if !ctx.device.is_ios {
        return Ok(());
    }
    log::info!("iOS detected; applying viewport workarounds");

    lock_viewport();
    set_vh();
    let window = gloo_utils::window();
    listen(&window, "resize", |_| set_vh())?;
    listen(&window, "orientationchange", |_| set_vh())?;

    attach_double_tap_guard(ctx)?;
    attach_input_zoom_fix()?;
    enable_momentum_scrolling();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vh_is_one_percent_of_inner_height() {
        assert_eq!(vh_unit(800.0), "8px");
        assert_eq!(vh_unit(667.0), "6.67px");
    }
}
