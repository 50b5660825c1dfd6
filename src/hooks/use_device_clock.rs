use gloo_timers::callback::Interval;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::services::device_api::get_clock;

/// Polls the device clock: once on mount, then every second until unmount.
///
/// Ticks do not wait for each other, so a slow device can have several
/// requests in flight. A failed tick leaves the previous reading in place.
#[hook]
pub fn use_device_clock() -> UseStateHandle<Option<String>> {
    let clock = use_state(|| None::<String>);

    {
        let clock = clock.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            let tick = move || {
                let clock = clock.clone();
                let aborted_check = aborted_check.clone();
                spawn_local(async move {
                    if let Some(time) = get_clock().await {
                        if !aborted_check.get() {
                            clock.set(Some(time));
                        }
                    }
                });
            };

            tick();
            let interval = Interval::new(Config::CLOCK_POLL_INTERVAL_MS, tick);

            move || {
                aborted.set(true);
                drop(interval);
            }
        });
    }

    clock
}
