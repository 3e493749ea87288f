//! Character-by-character typing effect with a blinking caret.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlElement;

use crate::config::TypingTiming;
use crate::dom;

const CARET: &str = "3px solid #4ecdc4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingAction {
    /// Show the first `n` characters.
    Show(usize),
    HideCaret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    /// Milliseconds since the effect started.
    pub at_ms: u32,
    pub action: TypingAction,
}

/// Lays out the full typing sequence for `text`.
///
/// `jitter` is called once per gap between characters and must return a value
/// in `[0, timing.jitter_ms)`.
pub fn typing_timeline(text: &str, timing: &TypingTiming, mut jitter: impl FnMut() -> u32) -> Vec<TypingStep> {
    let len = text.chars().count();
    let mut steps = Vec::with_capacity(len + 1);
    let mut at = timing.warmup_ms;

    for n in 1..=len {
        if n > 1 {
            at += timing.speed_ms + jitter().min(timing.jitter_ms.saturating_sub(1));
        }
        steps.push(TypingStep {
            at_ms: at,
            action: TypingAction::Show(n),
        });
    }

    steps.push(TypingStep {
        at_ms: at + timing.caret_hold_ms,
        action: TypingAction::HideCaret,
    });
    steps
}

/// The first `n` characters of `text`, cut on a char boundary.
pub fn prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub trait TypeSink {
    fn set_text(&self, text: &str);
    fn set_caret(&self, visible: bool);
}

impl TypeSink for HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_caret(&self, visible: bool) {
        dom::set_style(self, "border-right", if visible { CARET } else { "none" });
    }
}

/// Applies one step of the timeline to a sink.
pub fn apply<S: TypeSink + ?Sized>(sink: &S, text: &str, action: &TypingAction) {
    match action {
        TypingAction::Show(n) => sink.set_text(prefix(text, *n)),
        TypingAction::HideCaret => sink.set_caret(false),
    }
}

/// Milliseconds to wait before each step, measured from the step before it.
pub fn step_delays(steps: &[TypingStep]) -> impl Iterator<Item = u32> + '_ {
    steps.iter().scan(0, |now, step| {
        let delay = step.at_ms.saturating_sub(*now);
        *now = step.at_ms;
        Some(delay)
    })
}

/// Keeps a running typewriter alive. Dropping it stops the effect where it is.
pub struct TypewriterHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

pub struct Typewriter;

impl Typewriter {
    /// Clears `element` and types `text` back into it.
    pub fn start(element: HtmlElement, text: String, timing: &TypingTiming) -> TypewriterHandle {
        let jitter_max = timing.jitter_ms.max(1) as f64;
        let steps = typing_timeline(&text, timing, || (js_sys::Math::random() * jitter_max) as u32);

        element.set_text("");
        element.set_caret(true);

        let cancelled = Rc::new(Cell::new(false));
        wasm_bindgen_futures::spawn_local(run(element, text, steps, cancelled.clone()));
        TypewriterHandle { cancelled }
    }
}

async fn run<S: TypeSink>(sink: S, text: String, steps: Vec<TypingStep>, cancelled: Rc<Cell<bool>>) {
    for (step, delay) in steps.iter().zip(step_delays(&steps)) {
        TimeoutFuture::new(delay).await;
        if cancelled.get() {
            log::debug!("Typewriter stopped before {:?}", step.action);
            return;
        }
        apply(&sink, &text, &step.action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn timing() -> TypingTiming {
        TypingTiming {
            warmup_ms: 1000,
            speed_ms: 100,
            jitter_ms: 40,
            caret_hold_ms: 2000,
        }
    }

    #[derive(Default)]
    struct Recorder {
        text: RefCell<String>,
        caret: RefCell<bool>,
        history: RefCell<Vec<String>>,
    }

    impl TypeSink for Recorder {
        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
            self.history.borrow_mut().push(text.to_string());
        }

        fn set_caret(&self, visible: bool) {
            *self.caret.borrow_mut() = visible;
        }
    }

    #[test]
    fn engineer_is_fully_typed_and_caret_removed_two_seconds_later() {
        let steps = typing_timeline("Engineer", &timing(), || 0);
        let sink = Recorder::default();
        sink.set_caret(true);
        for step in &steps {
            apply(&sink, "Engineer", &step.action);
        }

        assert_eq!(*sink.text.borrow(), "Engineer");
        assert!(!*sink.caret.borrow());

        let last_char = &steps[steps.len() - 2];
        let hide = &steps[steps.len() - 1];
        assert_eq!(last_char.action, TypingAction::Show(8));
        assert_eq!(steps[0].at_ms, 1000);
        assert_eq!(hide.action, TypingAction::HideCaret);
        assert_eq!(hide.at_ms - last_char.at_ms, 2000);
    }

    #[test]
    fn intermediate_states_are_growing_prefixes() {
        let text = "Systems Engineer";
        let mut seed = 7u32;
        let steps = typing_timeline(text, &timing(), || {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 16) % 40
        });
        let sink = Recorder::default();
        for step in &steps {
            apply(&sink, text, &step.action);
        }

        let history = sink.history.borrow();
        assert_eq!(history.len(), text.chars().count());
        for pair in history.windows(2) {
            assert!(pair[1].starts_with(pair[0].as_str()));
            assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
        }
        assert!(steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
    }

    #[test]
    fn total_time_is_bounded_by_speed_and_jitter() {
        let text = "Engineer";
        let n = text.chars().count() as u32;
        let t = timing();

        let fastest = typing_timeline(text, &t, || 0);
        let slowest = typing_timeline(text, &t, || u32::MAX);
        let done = |steps: &[TypingStep]| steps[steps.len() - 2].at_ms;

        assert_eq!(done(&fastest), t.warmup_ms + (n - 1) * t.speed_ms);
        assert_eq!(done(&slowest), t.warmup_ms + (n - 1) * (t.speed_ms + t.jitter_ms - 1));
    }

    #[test]
    fn empty_text_only_hides_the_caret() {
        let steps = typing_timeline("", &timing(), || 0);
        assert_eq!(
            steps,
            vec![TypingStep {
                at_ms: 3000,
                action: TypingAction::HideCaret,
            }]
        );
    }

    #[test]
    fn delays_add_back_up_to_the_timeline() {
        let steps = typing_timeline("abc", &timing(), || 25);
        let delays: Vec<u32> = step_delays(&steps).collect();

        assert_eq!(delays, vec![1000, 125, 125, 2000]);
        let mut at = 0;
        for (step, delay) in steps.iter().zip(&delays) {
            at += delay;
            assert_eq!(at, step.at_ms);
        }
    }

    #[test]
    fn prefixes_respect_char_boundaries() {
        assert_eq!(prefix("héllo", 2), "hé");
        assert_eq!(prefix("héllo", 0), "");
        assert_eq!(prefix("héllo", 99), "héllo");
    }
}
