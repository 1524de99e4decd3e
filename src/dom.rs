//! Thin helpers over `web-sys` shared by the behavior modules.

use crate::error::BehaviorError;
use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event, EventTarget, HtmlElement, Node, NodeList};

/// Attach a page-lifetime listener. The closure is leaked on purpose: the
/// listeners live exactly as long as the page does.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// All elements in the document matching `selector`.
pub fn query_all(selector: &str) -> Vec<Element> {
    collect_elements(gloo_utils::document().query_selector_all(selector), selector)
}

/// All descendants of `root` matching `selector`.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    collect_elements(root.query_selector_all(selector), selector)
}

// An invalid selector yields nothing.
fn collect_elements(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let Ok(list) = list else {
        log::debug!("Invalid selector '{}'", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All `HtmlElement`s in the document matching `selector`.
pub fn query_html_all(selector: &str) -> Vec<HtmlElement> {
    query_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// First `HtmlElement` matching `selector`, if any.
pub fn query_html(selector: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set an inline style property, ignoring rejection by the engine.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("Could not set {}={}: {:?}", property, value, e);
    }
}

/// Clear an inline style property (the `style.x = ''` idiom).
pub fn clear_style(el: &HtmlElement, property: &str) {
    if let Err(e) = el.style().remove_property(property) {
        log::debug!("Could not clear {}: {:?}", property, e);
    }
}

/// Whether `container` contains the node an event was dispatched to.
pub fn contains_target(container: &Node, event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

pub fn viewport_width() -> Option<f64> {
    gloo_utils::window().inner_width().ok().and_then(|v| v.as_f64())
}

pub fn viewport_height() -> Option<f64> {
    gloo_utils::window().inner_height().ok().and_then(|v| v.as_f64())
}

pub fn scroll_top() -> f64 {
    gloo_utils::window()
        .page_y_offset()
        .ok()
        .filter(|y| *y > 0.0)
        .unwrap_or_else(|| gloo_utils::document_element().scroll_top() as f64)
}

/// High-resolution timestamp in milliseconds.
pub fn now_ms() -> f64 {
    gloo_utils::window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Resolve on the next animation frame with its timestamp.
pub async fn next_frame() -> Result<f64, BehaviorError> {
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(e) = gloo_utils::window().request_animation_frame(&resolve) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    let ts = JsFuture::from(promise).await?;
    Ok(ts.as_f64().unwrap_or_else(now_ms))
}

/// `document.readyState` (`loading`, `interactive` or `complete`).
pub fn ready_state() -> String {
    js_sys::Reflect::get(&gloo_utils::document(), &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}
