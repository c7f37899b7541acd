//! Count-up Animation
//!
//! Cosmetic counter for the host's count displays. One animator per display
//! target; starting a new run cancels the one in flight.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use web_sys::Element;

/// Values shown on successive ticks, ending exactly at `target`
pub fn count_up_steps(target: u64, steps: u64) -> Vec<u64> {
    let increment = target.div_ceil(steps.max(1)).max(1);
    let mut values = Vec::new();
    let mut current = 0u64;
    loop {
        current = current.saturating_add(increment).min(target);
        values.push(current);
        if current >= target {
            break values;
        }
    }
}

pub struct CountUp {
    element: Element,
    tick_ms: u32,
    steps: u64,
    generation: Rc<Cell<u64>>,
}

impl CountUp {
    pub fn new(element: Element, tick_ms: u32, steps: u64) -> Self {
        Self { element, tick_ms, steps, generation: Rc::new(Cell::new(0)) }
    }

    /// Animate from 0 to `target`, superseding any earlier run
    pub fn start(&self, target: u64) {
        let run = self.generation.get().wrapping_add(1);
        self.generation.set(run);

        let generation = Rc::clone(&self.generation);
        let element = self.element.clone();
        let tick_ms = self.tick_ms;
        let values = count_up_steps(target, self.steps);
        spawn_local(async move {
            for value in values {
                TimeoutFuture::new(tick_ms).await;
                if generation.get() != run {
                    return;
                }
                element.set_text_content(Some(&value.to_string()));
            }
        });
    }
}
