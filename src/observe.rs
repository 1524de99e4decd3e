//! Fire-once visibility observation on top of `IntersectionObserver`.

use crate::config::BehaviorConfig;
use crate::error::BehaviorError;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl From<&BehaviorConfig> for ObserverOptions {
    fn from(config: &BehaviorConfig) -> Self {
        Self {
            threshold: config.observer_threshold,
            root_margin: config.observer_root_margin.clone(),
        }
    }
}

/// Remembers which targets have already fired.
#[derive(Debug, Clone)]
pub struct FireOnce<T> {
    fired: Vec<T>,
}

impl<T> Default for FireOnce<T> {
    fn default() -> Self {
        Self { fired: Vec::new() }
    }
}

impl<T: PartialEq + Clone> FireOnce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets from one batch of `(target, is_intersecting)` entries that
    /// should fire now: visible, and never fired before.
    pub fn admit<I>(&mut self, entries: I) -> Vec<T>
    where
        I: IntoIterator<Item = (T, bool)>,
    {
        let mut ready = Vec::new();
        for (target, visible) in entries {
            if visible && !self.fired.contains(&target) {
                self.fired.push(target.clone());
                ready.push(target);
            }
        }
        ready
    }
}

/// Call `on_visible` for each element the first time it becomes visible.
/// Elements are unobserved as soon as they fire, so scrolling back never
/// re-triggers them.
pub fn observe_once<F>(
    elements: Vec<Element>,
    options: &ObserverOptions,
    mut on_visible: F,
) -> Result<(), BehaviorError>
where
    F: FnMut(Element) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let mut gate = FireOnce::new();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let batch = entries.iter().map(|entry| {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            (entry.target(), entry.is_intersecting())
        });
        for target in gate.admit(batch) {
            on_visible(target.clone());
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
