//! Scroll-reactive navbar background and hero parallax.

use crate::context::PageContext;
use crate::dom::{self, listen, set_style};
use crate::error::BehaviorError;
use crate::timing::{debounce, throttle};
use std::cmp::Ordering;
use std::rc::Rc;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Still,
}

/// Remembers the previous scroll offset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrollTracker {
    last_scroll_top: f64,
}

impl ScrollTracker {
    /// Record a new offset and report the movement relative to the last one.
    pub fn record(&mut self, scroll_top: f64) -> ScrollDirection {
        let direction = match scroll_top.partial_cmp(&self.last_scroll_top) {
            Some(Ordering::Greater) => ScrollDirection::Down,
            Some(Ordering::Less) => ScrollDirection::Up,
            _ => ScrollDirection::Still,
        };
        self.last_scroll_top = scroll_top;
        direction
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }
}

/// Navbar look for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarAppearance {
    Top,
    Scrolled,
}

impl NavbarAppearance {
    pub fn for_offset(scroll_top: f64, threshold_px: f64) -> Self {
        if scroll_top > threshold_px {
            NavbarAppearance::Scrolled
        } else {
            NavbarAppearance::Top
        }
    }

    /// `(background, backdrop filter)` inline values.
    pub fn styles(self) -> (&'static str, &'static str) {
        match self {
            NavbarAppearance::Scrolled => ("rgba(255, 255, 255, 0.95)", "blur(10px)"),
            NavbarAppearance::Top => ("var(--bg-light)", "none"),
        }
    }

    fn apply(self, navbar: &HtmlElement) {
        let (background, filter) = self.styles();
        set_style(navbar, "background", background);
        set_style(navbar, "backdrop-filter", filter);
        set_style(navbar, "-webkit-backdrop-filter", filter);
    }
}

/// CSS transform for the hero at a scroll offset.
pub fn parallax_transform(scroll_top: f64, rate: f64) -> String {
    // Adding 0.0 normalizes -0.0 so the top of the page renders "0px".
    format!("translateY({}px)", scroll_top * rate + 0.0)
}

/// Attach the navbar and parallax reactions to window scroll.
///
/// Scroll events are throttled; a debounced settle pass runs once scrolling
/// stops so the final offset is always rendered. Nothing is written before
/// the first scroll event, so the stylesheet owns the initial look.
pub fn attach(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    let navbar = dom::query_html(".navbar");
    let hero = dom::query_html(".hero");
    if navbar.is_none() && hero.is_none() {
        log::debug!("No .navbar or .hero; scroll effects skipped");
        return Ok(());
    }

    let update = {
        let ctx = ctx.clone();
        move || {
            let scroll_top = dom::scroll_top();
            let direction = ctx.scroll.borrow_mut().record(scroll_top);
            log::trace!("scroll {:?} to {}", direction, scroll_top);

            if let Some(navbar) = &navbar {
                NavbarAppearance::for_offset(scroll_top, ctx.config.navbar_scroll_threshold_px)
                    .apply(navbar);
            }
            if let Some(hero) = &hero {
                set_style(hero, "transform", &parallax_transform(scroll_top, ctx.config.parallax_rate));
            }
        }
    };
    let update = Rc::new(update);

    let mut throttled = {
        let update = update.clone();
        throttle(move || update(), ctx.config.scroll_throttle_ms)
    };
    let mut settle = {
        let update = update.clone();
        debounce(move || update(), ctx.config.scroll_settle_ms)
    };

    listen(&gloo_utils::window(), "scroll", move |_| {
        throttled();
        settle();
    })?;
    Ok(())
}
