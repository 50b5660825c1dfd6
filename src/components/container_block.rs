use web_sys::Element;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    container::Container,
    menu::MenuAnchor,
    schedule::Schedule,
    session::Action,
};

#[derive(Properties, PartialEq)]
pub struct ContainerBlockProps {
    pub container: Container,
    /// This container's schedules, in store order.
    pub schedules: Vec<Schedule>,
    pub on_action: Callback<Action>,
}

/// One container's card: colored header, add button and its schedule table.
#[function_component(ContainerBlock)]
pub fn container_block(props: &ContainerBlockProps) -> Html {
    let container = props.container;
    let number = container.number();
    let color = container.color();

    let on_add = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::OpenAddSchedule(container)))
    };

    html! {
        <section
            class="container-block"
            id={format!("container{number}-block")}
            style={format!("border-top-color: {color};")}
        >
            <div class="container-header" style={format!("background-color: {color};")}>
                <h2>{container.to_string()}</h2>
                <button class="add-schedule" onclick={on_add}>{"Add Schedule"}</button>
            </div>
            <table class="schedule-table" id={format!("container{number}-table")}>
                <thead>
                    <tr>
                        <th>{"Days"}</th>
                        <th>{"Pills"}</th>
                        <th>{"Times"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.schedules.iter().map(|schedule| html! {
                            <ScheduleRow
                                key={schedule.id.to_string()}
                                schedule={schedule.clone()}
                                on_action={props.on_action.clone()}
                            />
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ScheduleRowProps {
    schedule: Schedule,
    on_action: Callback<Action>,
}

#[function_component(ScheduleRow)]
fn schedule_row(props: &ScheduleRowProps) -> Html {
    let schedule = &props.schedule;

    let on_gear = {
        let on_action = props.on_action.clone();
        let id = schedule.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let anchor = e.target_dyn_into::<Element>().map(|icon| menu_anchor(&icon));
            on_action.emit(Action::ToggleMenu { id, anchor });
        })
    };

    html! {
        <tr>
            <td>{schedule.days_label()}</td>
            <td>{schedule.pill_count.to_string()}</td>
            <td>{schedule.times_label()}</td>
            <td class="gear-cell">
                <span class="gear-icon" title="Actions" onclick={on_gear}>{"⚙"}</span>
            </td>
        </tr>
    }
}

/// Page position just below the gear icon, shifted slightly left.
fn menu_anchor(icon: &Element) -> MenuAnchor {
    let rect = icon.get_bounding_client_rect();
    let (scroll_x, scroll_y) = web_sys::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or_default();

    MenuAnchor {
        left: rect.left() + scroll_x + Config::MENU_OFFSET_X,
        top: rect.bottom() + scroll_y,
    }
}
