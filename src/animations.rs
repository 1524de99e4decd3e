//! Visibility-triggered effects: skill bars, counters and lazy images.

use crate::context::PageContext;
use crate::dom::{self, next_frame, now_ms, set_style};
use crate::error::{log_failures, BehaviorError};
use crate::observe::{observe_once, ObserverOptions};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

pub const LAZY_CLASS: &str = "lazy";

/// Parse a `data-target` value the way `parseInt` does: optional sign and
/// leading digits, anything after them ignored. Values beyond `i64`
/// saturate.
pub fn parse_counter_target(raw: &str) -> Result<i64, BehaviorError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(BehaviorError::InvalidCounterTarget(raw.to_string()));
    }
    let value = digits.bytes().fold(0i64, |acc, d| {
        let d = i64::from(d - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Ok(value)
}

/// What a single animation frame should do to the counter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterStep {
    /// New text value, or `None` when it did not change since the last frame.
    pub show: Option<i64>,
    pub finished: bool,
}

/// Time-based count-up from 0 to `target`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    last_shown: Option<i64>,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            last_shown: None,
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        if self.target <= 0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let progress = (elapsed_ms / self.duration_ms).max(0.0);
        ((self.target as f64 * progress).floor() as i64).min(self.target)
    }

    pub fn step(&mut self, elapsed_ms: f64) -> CounterStep {
        let value = self.value_at(elapsed_ms);
        let show = (self.last_shown != Some(value)).then_some(value);
        self.last_shown = Some(value);
        CounterStep {
            show,
            finished: value == self.target,
        }
    }
}

async fn run_counter(counter: Element, target: i64, duration_ms: f64) {
    let mut animation = CounterAnimation::new(target, duration_ms);
    let start = now_ms();
    loop {
        let step = animation.step(now_ms() - start);
        if let Some(value) = step.show {
            counter.set_text_content(Some(&value.to_string()));
        }
        if step.finished {
            break;
        }
        if let Err(e) = next_frame().await {
            log::warn!("Counter animation interrupted: {}", e);
            counter.set_text_content(Some(&target.to_string()));
            break;
        }
    }
}

fn attach_counters(ctx: &Rc<PageContext>, options: &ObserverOptions) -> Result<(), BehaviorError> {
    let counters = dom::query_all(".counter");
    let duration_ms = ctx.config.counter_duration_ms;
    observe_once(counters, options, move |counter| {
        let raw = counter.get_attribute("data-target").unwrap_or_default();
        match parse_counter_target(&raw) {
            Ok(target) => spawn_local(run_counter(counter, target, duration_ms)),
            Err(e) => log::warn!("{}", e),
        }
    })
}

/// Width changes for one skill bar: collapse now, restore after a delay so
/// the CSS transition animates the growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBarReveal {
    pub target_width: String,
}

impl SkillBarReveal {
    pub const COLLAPSED_WIDTH: &'static str = "0%";

    pub fn capture(inline_width: &str) -> Self {
        Self {
            target_width: inline_width.to_string(),
        }
    }

    /// Widths written in order: immediately, then after the delay.
    pub fn widths(&self) -> [&str; 2] {
        [Self::COLLAPSED_WIDTH, &self.target_width]
    }
}

fn reveal_skill_bar(bar: &HtmlElement, delay_ms: u32) {
    let width = bar.style().get_property_value("width").unwrap_or_default();
    let reveal = SkillBarReveal::capture(&width);
    let [collapsed, _] = reveal.widths();
    set_style(bar, "width", collapsed);
    let bar = bar.clone();
    Timeout::new(delay_ms, move || set_style(&bar, "width", &reveal.target_width)).forget();
}

fn attach_skill_bars(ctx: &Rc<PageContext>, options: &ObserverOptions) -> Result<(), BehaviorError> {
    let bars = dom::query_all(".skill-bar");
    let delay_ms = ctx.config.skill_bar_reveal_delay_ms;
    observe_once(bars, options, move |bar| {
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            reveal_skill_bar(bar, delay_ms);
        }
    })
}

fn load_image(img: &Element) {
    if let Some(src) = img.get_attribute("data-src") {
        if let Err(e) = img.set_attribute("src", &src) {
            log::warn!("Could not load lazy image {}: {:?}", src, e);
        }
    }
    if let Err(e) = img.class_list().remove_1(LAZY_CLASS) {
        log::debug!("Could not drop .{}: {:?}", LAZY_CLASS, e);
    }
}

fn attach_lazy_images(options: &ObserverOptions) -> Result<(), BehaviorError> {
    let images = dom::query_all("img[data-src]");
    observe_once(images, options, |img| load_image(&img))
}

/// Attach skill bars, counters and lazy images independently; a failure in
/// one is logged and does not keep the others from attaching.
pub fn attach(ctx: &Rc<PageContext>) {
    let options = ObserverOptions::from(&ctx.config);
    log_failures([
        ("skill bars", attach_skill_bars(ctx, &options)),
        ("counters", attach_counters(ctx, &options)),
        ("lazy images", attach_lazy_images(&options)),
    ]);
}
