use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{forms::ScheduleForm, schedule::Weekday, session::Action};

#[derive(Properties, PartialEq)]
pub struct ScheduleDialogProps {
    pub form: ScheduleForm,
    pub on_action: Callback<Action>,
}

/// Modal for adding or editing one schedule.
#[function_component(ScheduleDialog)]
pub fn schedule_dialog(props: &ScheduleDialogProps) -> Html {
    let form = &props.form;
    let color = form.container().color();

    // Every button in the dialog maps straight onto one action
    let emit = |action: Action| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let day_buttons = Weekday::all()
        .iter()
        .map(|&day| {
            let class = classes!(form.is_day_active(day).then_some("active"));
            html! {
                <button
                    type="button"
                    {class}
                    data-day={day.name()}
                    title={day.name()}
                    onclick={emit(Action::ToggleDay(day))}
                >
                    {day.short()}
                </button>
            }
        })
        .collect::<Html>();

    let time_inputs = form
        .times()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let on_action = props.on_action.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_action.emit(Action::SetTime {
                    index,
                    value: input.value(),
                });
            });

            html! {
                <div key={index.to_string()}>
                    <label>{format!("Time #{}:", index + 1)}</label>
                    <input type="time" value={value.clone()} {oninput} />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <div class="overlay"></div>
            <div
                class="dialog schedule-dialog"
                id="scheduleDialog"
                style={format!("--accent-color: {color};")}
            >
                <div class="header" style={format!("background: {color};")}>
                    <h2 id="dialogTitle">{form.title()}</h2>
                    <span class="dialog-subtitle">{form.container().to_string()}</span>
                </div>

                <div class="dialog-body">
                    <button
                        type="button"
                        id="everydayBtn"
                        class={classes!("everyday", form.every_day().then_some("active"))}
                        onclick={emit(Action::ToggleEveryDay)}
                    >
                        {"Every Day"}
                    </button>
                    <div class="days-grid">{day_buttons}</div>

                    <div class="pill-count">
                        <label>{"Pills per day"}</label>
                        <button type="button" onclick={emit(Action::DecrementPills)}>{"−"}</button>
                        <input
                            id="pillCount"
                            type="number"
                            readonly={true}
                            value={form.pill_count().to_string()}
                        />
                        <button type="button" onclick={emit(Action::IncrementPills)}>{"+"}</button>
                    </div>

                    <div class="time-inputs" id="timeInputs">{time_inputs}</div>
                </div>

                <div class="dialog-actions">
                    <button type="button" onclick={emit(Action::CloseScheduleDialog)}>{"Cancel"}</button>
                    <button type="button" class="primary" onclick={emit(Action::SaveSchedule)}>
                        {"Save"}
                    </button>
                </div>
            </div>
        </>
    }
}
