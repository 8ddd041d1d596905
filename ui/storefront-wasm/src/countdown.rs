//! Sale countdown display.
//!
//! Runs as its own local task; the loop ends when the countdown finishes.

use crate::dom::{self, Elements};
use gloo_timers::future::TimeoutFuture;
use sf_countdown::{Countdown, TICK_INTERVAL_MS, Tick};

fn render(els: &Elements, countdown: &Countdown) {
    let [hours, minutes, seconds] = countdown.digits();
    dom::set_text(&els.hours, &hours);
    dom::set_text(&els.minutes, &minutes);
    dom::set_text(&els.seconds, &seconds);
}

pub fn start(els: &Elements) {
    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let mut countdown = Countdown::default();
        render(&els, &countdown);
        loop {
            TimeoutFuture::new(TICK_INTERVAL_MS).await;
            if countdown.tick() == Tick::Finished {
                break;
            }
            render(&els, &countdown);
        }
    });
}
