//! Mobile menu as an explicit two-state machine.
//!
//! Every path that changes the menu goes through [`MenuState::on`] and then
//! [`MobileMenu::apply`], which writes the complete set of class markers and
//! body styles for the new state. The toggle, the panel and the body can
//! therefore never disagree about whether the menu is open.

use crate::context::PageContext;
use crate::dom::{self, clear_style, contains_target, listen, set_style};
use crate::error::BehaviorError;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::HtmlElement;

pub const TOGGLE_ID: &str = "mobile-menu-toggle";
pub const PANEL_ID: &str = "mobile-menu";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    ToggleClicked,
    LinkClicked,
    Resized { width: f64 },
    OutsideClicked,
}

impl MenuState {
    /// Next state after `event`. `breakpoint_px` is the widest viewport that
    /// still counts as mobile.
    pub fn on(self, event: MenuEvent, breakpoint_px: f64) -> MenuState {
        match event {
            MenuEvent::ToggleClicked => match self {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            },
            MenuEvent::LinkClicked | MenuEvent::OutsideClicked => MenuState::Closed,
            MenuEvent::Resized { width } if width > breakpoint_px => MenuState::Closed,
            MenuEvent::Resized { .. } => self,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Every DOM mutation that goes with a menu state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyles {
    pub active: bool,
    pub panel_display: &'static str,
    /// `None` clears the inline property.
    pub body_overflow: Option<&'static str>,
    pub body_position: Option<&'static str>,
    pub body_width: Option<&'static str>,
    /// Whether position/width are touched at all (iOS only).
    pub pin_body: bool,
}

impl MenuStyles {
    pub fn for_state(state: MenuState, is_ios: bool) -> Self {
        match state {
            MenuState::Open => MenuStyles {
                active: true,
                panel_display: "block",
                body_overflow: Some("hidden"),
                body_position: Some("fixed"),
                body_width: Some("100%"),
                pin_body: is_ios,
            },
            MenuState::Closed => MenuStyles {
                active: false,
                panel_display: "none",
                body_overflow: None,
                body_position: None,
                body_width: None,
                pin_body: is_ios,
            },
        }
    }
}

/// Live menu bound to its toggle, panel and the document body.
pub struct MobileMenu {
    toggle: HtmlElement,
    panel: HtmlElement,
    body: HtmlElement,
    state: Cell<MenuState>,
    ctx: Rc<PageContext>,
}

impl MobileMenu {
    pub fn new(toggle: HtmlElement, panel: HtmlElement, ctx: Rc<PageContext>) -> Self {
        Self {
            toggle,
            panel,
            body: gloo_utils::body(),
            state: Cell::new(MenuState::Closed),
            ctx,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Feed an event through the state machine and render the result.
    pub fn dispatch(&self, event: MenuEvent) {
        let breakpoint = self.ctx.config.mobile_breakpoint_px;
        // Resizes within the mobile range leave the menu untouched.
        if matches!(event, MenuEvent::Resized { width } if width <= breakpoint) {
            return;
        }
        let previous = self.state.get();
        let next = previous.on(event, breakpoint);
        if next != previous {
            log::debug!("Mobile menu {:?} -> {:?} on {:?}", previous, next, event);
        }
        self.state.set(next);
        self.apply(next);
    }

    fn apply(&self, state: MenuState) {
        let styles = MenuStyles::for_state(state, self.ctx.device.is_ios);
        for el in [&self.toggle, &self.panel] {
            let classes = el.class_list();
            let result = if styles.active {
                classes.add_1(ACTIVE_CLASS)
            } else {
                classes.remove_1(ACTIVE_CLASS)
            };
            if let Err(e) = result {
                log::warn!("Could not update menu marker: {:?}", e);
            }
        }
        set_style(&self.panel, "display", styles.panel_display);
        set_or_clear(&self.body, "overflow", styles.body_overflow);
        if styles.pin_body {
            set_or_clear(&self.body, "position", styles.body_position);
            set_or_clear(&self.body, "width", styles.body_width);
        }
    }
}

fn set_or_clear(el: &HtmlElement, property: &str, value: Option<&str>) {
    match value {
        Some(value) => set_style(el, property, value),
        None => clear_style(el, property),
    }
}

/// Wire the toggle, in-menu links, resize and outside clicks.
pub fn attach(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    let (Some(toggle), Some(panel)) = (dom::by_id(TOGGLE_ID), dom::by_id(PANEL_ID)) else {
        log::debug!("Mobile menu markup not found; menu behavior skipped");
        return Ok(());
    };
    let menu = Rc::new(MobileMenu::new(toggle.clone(), panel.clone(), ctx.clone()));

    {
        let menu = menu.clone();
        listen(&toggle, "click", move |e| {
            e.prevent_default();
            e.stop_propagation();
            menu.dispatch(MenuEvent::ToggleClicked);
        })?;
    }

    for link in dom::query_all_within(&panel, "a") {
        let menu = menu.clone();
        listen(&link, "click", move |_| menu.dispatch(MenuEvent::LinkClicked))?;
    }

    {
        let menu = menu.clone();
        listen(&gloo_utils::window(), "resize", move |_| {
            if let Some(width) = dom::viewport_width() {
                menu.dispatch(MenuEvent::Resized { width });
            }
        })?;
    }

    {
        let menu = menu.clone();
        listen(&gloo_utils::document(), "click", move |e| {
            if !contains_target(&menu.toggle, &e) && !contains_target(&menu.panel, &e) {
                menu.dispatch(MenuEvent::OutsideClicked);
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BREAKPOINT: f64 = 767.0;

    #[test]
    fn toggle_flips_state() {
        let open = MenuState::Closed.on(MenuEvent::ToggleClicked, BREAKPOINT);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.on(MenuEvent::ToggleClicked, BREAKPOINT), MenuState::Closed);
    }

    #[test]
    fn link_and_outside_clicks_always_close() {
        for state in [MenuState::Open, MenuState::Closed] {
            assert_eq!(state.on(MenuEvent::LinkClicked, BREAKPOINT), MenuState::Closed);
            assert_eq!(state.on(MenuEvent::OutsideClicked, BREAKPOINT), MenuState::Closed);
        }
    }

    #[test]
    fn resize_closes_only_above_breakpoint() {
        let open = MenuState::Open;
        assert_eq!(open.on(MenuEvent::Resized { width: 767.0 }, BREAKPOINT), MenuState::Open);
        assert_eq!(open.on(MenuEvent::Resized { width: 375.0 }, BREAKPOINT), MenuState::Open);
        assert_eq!(open.on(MenuEvent::Resized { width: 768.0 }, BREAKPOINT), MenuState::Closed);
    }

    #[test]
    fn styles_are_consistent_with_state_after_any_event_sequence() {
        let events = [
            MenuEvent::ToggleClicked,
            MenuEvent::LinkClicked,
            MenuEvent::ToggleClicked,
            MenuEvent::Resized { width: 500.0 },
            MenuEvent::OutsideClicked,
            MenuEvent::ToggleClicked,
            MenuEvent::Resized { width: 1024.0 },
            MenuEvent::ToggleClicked,
            MenuEvent::ToggleClicked,
        ];
        let mut state = MenuState::default();
        for event in events {
            state = state.on(event, BREAKPOINT);
            let styles = MenuStyles::for_state(state, false);
            assert_eq!(styles.active, state.is_open());
            assert_eq!(styles.body_overflow.is_some(), state.is_open());
            assert_eq!(styles.panel_display == "block", state.is_open());
        }
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn ios_pins_body_in_both_directions() {
        let open = MenuStyles::for_state(MenuState::Open, true);
        assert!(open.pin_body);
        assert_eq!(open.body_position, Some("fixed"));
        assert_eq!(open.body_width, Some("100%"));

        let closed = MenuStyles::for_state(MenuState::Closed, true);
        assert!(closed.pin_body);
        assert_eq!(closed.body_position, None);
        assert_eq!(closed.body_width, None);
    }

    #[test]
    fn non_ios_leaves_body_position_alone() {
        assert!(!MenuStyles::for_state(MenuState::Open, false).pin_body);
        assert_eq!(
            MenuStyles::for_state(MenuState::Closed, false),
            MenuStyles {
                active: false,
                panel_display: "none",
                body_overflow: None,
                body_position: None,
                body_width: None,
                pin_body: false,
            }
        );
    }
}
