use yew::prelude::*;

use crate::models::{
    container::Container,
    menu::MenuAnchor,
    schedule::ScheduleId,
    session::Action,
};

#[derive(Properties, PartialEq)]
pub struct GearMenuProps {
    pub id: ScheduleId,
    pub container: Container,
    pub anchor: MenuAnchor,
    pub on_action: Callback<Action>,
}

/// Floating Edit/Delete menu for the row whose gear was clicked.
#[function_component(GearMenu)]
pub fn gear_menu(props: &GearMenuProps) -> Html {
    let id = props.id;
    let container = props.container;

    let on_edit = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(Action::OpenEditSchedule { id, container });
        })
    };

    let on_delete = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::DeleteSchedule(id)))
    };

    let style = format!(
        "display: block; left: {:.0}px; top: {:.0}px;",
        props.anchor.left, props.anchor.top
    );

    html! {
        <div class="gear-menu" id={format!("menu-{id}")} {style}>
            <button onclick={on_edit}>{"Edit"}</button>
            <button onclick={on_delete}>{"Delete"}</button>
        </div>
    }
}
