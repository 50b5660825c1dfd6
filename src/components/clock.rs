use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_device_clock::use_device_clock;

/// Live device time from the dispenser's RTC.
#[function_component(DeviceClock)]
pub fn device_clock() -> Html {
    let clock = use_device_clock();

    let text = clock
        .as_deref()
        .unwrap_or(Config::CLOCK_PLACEHOLDER)
        .to_string();

    html! {
        <div class="clock" id="clock" title="Device time">{text}</div>
    }
}
