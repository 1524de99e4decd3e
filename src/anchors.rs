//! Smooth scrolling for in-page anchor links.

use crate::dom::{self, listen};
use crate::error::BehaviorError;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Element id referenced by an in-page `href`, if it names one.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// What a click on an in-page link does: the default jump is always
/// cancelled, and the resolved target, if any, is scrolled into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorClick<T> {
    pub prevent_default: bool,
    pub scroll_to: Option<T>,
}

/// Resolve a clicked `href` through `lookup` (element id to element).
pub fn resolve_click<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorClick<T> {
    AnchorClick {
        prevent_default: true,
        scroll_to: fragment_id(href).and_then(lookup),
    }
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Intercept every `a[href^="#"]`. The default jump is always cancelled;
/// links whose fragment matches no element do nothing else.
pub fn attach() -> Result<(), BehaviorError> {
    let links = dom::query_all(r##"a[href^="#"]"##);
    log::debug!("Smooth scrolling {} anchor link(s)", links.len());

    for link in links {
        listen(&link.clone(), "click", move |e| {
            let href = link.get_attribute("href").unwrap_or_default();
            let click = resolve_click(&href, |id| gloo_utils::document().get_element_by_id(id));
            if click.prevent_default {
                e.prevent_default();
            }
            match click.scroll_to {
                Some(target) => scroll_to(&target),
                None => log::debug!("Anchor '{}' has no target", href),
            }
        })?;
    }
    Ok(())
}
