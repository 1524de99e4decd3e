//! Typewriter reveal for the hero heading.

use crate::context::PageContext;
use crate::dom;
use futures::stream::{self, StreamExt};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

/// Successive prefixes of a string, one more character each time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let ch = self.text[self.shown..].chars().next()?;
        self.shown += ch.len_utf8();
        Some(self.text[..self.shown].to_string())
    }
}

/// Wait before revealing frame `index`: the start delay for the first
/// character, the per-character interval for every later one.
pub fn delay_before_frame(index: usize, start_delay_ms: u32, interval_ms: u32) -> u32 {
    if index == 0 {
        start_delay_ms
    } else {
        interval_ms
    }
}

async fn type_out(heading: HtmlElement, text: String, start_delay_ms: u32, interval_ms: u32) {
    let heading = &heading;
    stream::iter(Typewriter::new(text).enumerate())
        .for_each(|(index, frame)| async move {
            TimeoutFuture::new(delay_before_frame(index, start_delay_ms, interval_ms)).await;
            heading.set_text_content(Some(&frame));
        })
        .await;
    log::debug!("Hero typing effect finished");
}

/// Clear `.hero h1` and type its text back in, once.
pub fn attach(ctx: &Rc<PageContext>) {
    let Some(heading) = dom::query_html(".hero h1") else {
        return;
    };
    let text = heading.text_content().unwrap_or_default();
    heading.set_text_content(Some(""));
    spawn_local(type_out(
        heading,
        text,
        ctx.config.typing_start_delay_ms,
        ctx.config.typing_char_interval_ms,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yields_growing_prefixes() {
        let frames: Vec<String> = Typewriter::new("Ciao").collect();
        assert_eq!(frames, vec!["C", "Ci", "Cia", "Ciao"]);
    }

    #[test]
    fn last_frame_is_the_full_text() {
        let text = "Full-stack developer";
        assert_eq!(Typewriter::new(text).last().as_deref(), Some(text));
        assert_eq!(Typewriter::new(text).count(), text.chars().count());
    }

    #[test]
    fn steps_over_multibyte_characters() {
        let frames: Vec<String> = Typewriter::new("Caffè ☕").collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[4], "Caffè");
        assert_eq!(frames[6], "Caffè ☕");
    }

    #[test]
    fn first_character_waits_the_full_start_delay() {
        // Holds even when the interval is longer than the start delay.
        assert_eq!(delay_before_frame(0, 500, 100), 500);
        assert_eq!(delay_before_frame(0, 50, 300), 50);
        assert_eq!(delay_before_frame(3, 50, 300), 300);

        let reveal_times: Vec<u32> = (0..4)
            .scan(0, |t, i| {
                *t += delay_before_frame(i, 500, 100);
                Some(*t)
            })
            .collect();
        assert_eq!(reveal_times, vec![500, 600, 700, 800]);
    }

    #[test]
    fn empty_text_produces_nothing() {
        assert_eq!(Typewriter::new("").next(), None);
    }
}
