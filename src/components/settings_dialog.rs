use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{forms::SettingsForm, session::Action};

#[derive(Properties, PartialEq)]
pub struct SettingsDialogProps {
    pub form: SettingsForm,
    pub on_action: Callback<Action>,
}

/// Motor settings for one container, with a one-shot hardware test.
#[function_component(SettingsDialog)]
pub fn settings_dialog(props: &SettingsDialogProps) -> Html {
    let form = &props.form;
    let values = form.values();
    let color = form.container().color();

    let slider = |to_action: fn(u32) -> Action| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                on_action.emit(to_action(value));
            }
        })
    };

    let emit = |action: Action| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let (speed_min, speed_max) = Config::MOTOR_SPEED_RANGE;
    let (threshold_min, threshold_max) = Config::TRIGGER_THRESHOLD_RANGE;
    let accent = format!("accent-color: {color};");

    html! {
        <>
            <div class="overlay"></div>
            <div
                class="dialog settings-dialog"
                id="settingsDialog"
                style={format!("border-top-color: {color};")}
            >
                <h2 id="settingsDialogTitle" style={format!("color: {color};")}>{form.title()}</h2>

                <div class="slider-row">
                    <label>
                        {"Motor Speed: "}
                        <span id="motorSpeedValue">{values.motor_speed.to_string()}</span>
                    </label>
                    <input
                        type="range"
                        id="motorSpeed"
                        min={speed_min.to_string()}
                        max={speed_max.to_string()}
                        value={values.motor_speed.to_string()}
                        style={accent.clone()}
                        oninput={slider(Action::SetMotorSpeed)}
                    />
                </div>

                <div class="slider-row">
                    <label>
                        {"Trigger Threshold: "}
                        <span id="triggerThresholdValue">{values.trigger_threshold.to_string()}</span>
                    </label>
                    <input
                        type="range"
                        id="triggerThreshold"
                        min={threshold_min.to_string()}
                        max={threshold_max.to_string()}
                        value={values.trigger_threshold.to_string()}
                        style={accent}
                        oninput={slider(Action::SetTriggerThreshold)}
                    />
                </div>

                <div class="dialog-actions">
                    <button
                        type="button"
                        id="testMotorButton"
                        style={format!("background-color: {color};")}
                        onclick={emit(Action::TestMotor)}
                    >
                        {"Test"}
                    </button>
                    <button type="button" onclick={emit(Action::CloseSettings)}>{"Cancel"}</button>
                    <button type="button" class="primary" onclick={emit(Action::SaveSettings)}>
                        {"Save"}
                    </button>
                </div>
            </div>
        </>
    }
}
