use crate::context::PageContext;
use crate::dom::{self, listen, set_style};
use crate::error::BehaviorError;
use std::rc::Rc;
use web_sys::HtmlElement;

const SOCIAL_LINK_SELECTOR: &str = ".social-links a, .social-links-contact a";
const HOVER_SCALE: &str = "scale(1.1)";
const REST_SCALE: &str = "scale(1)";

fn on(link: &HtmlElement, event: &str, transform: &'static str) -> Result<(), BehaviorError> {
    let target = link.clone();
    listen(link, event, move |_| set_style(&target, "transform", transform))
}

/// Grow social icons on hover, and on touch for iOS where hover never fires.
pub fn attach(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    for link in dom::query_html_all(SOCIAL_LINK_SELECTOR) {
        on(&link, "mouseenter", HOVER_SCALE)?;
        on(&link, "mouseleave", REST_SCALE)?;
        if ctx.device.is_ios {
            on(&link, "touchstart", HOVER_SCALE)?;
            on(&link, "touchend", REST_SCALE)?;
        }
    }
    Ok(())
}
