use yew::prelude::*;

use pill_dispenser_panel::components::{
    ContainerBlock, DeviceClock, GearMenu, ScheduleDialog, SettingsDialog, SettingsPanel, Status,
};
use pill_dispenser_panel::hooks::use_session::use_session;
use pill_dispenser_panel::hooks::use_theme::use_theme;
use pill_dispenser_panel::models::container::Container;

#[function_component(App)]
fn app() -> Html {
    let handle = use_session();
    let session = handle.session();
    let on_action = handle.dispatch.clone();

    use_theme(session.theme());

    let containers = Container::all()
        .iter()
        .map(|&container| {
            let schedules = session
                .schedules()
                .for_container(container)
                .cloned()
                .collect::<Vec<_>>();
            html! {
                <ContainerBlock
                    key={container.number().to_string()}
                    {container}
                    {schedules}
                    on_action={on_action.clone()}
                />
            }
        })
        .collect::<Html>();

    // Menus are rebuilt from the store on every render, so a deleted row
    // can never leave one behind.
    let gear_menu = session.menu().open_menu().and_then(|(id, anchor)| {
        session.schedules().find(id).map(|record| {
            html! {
                <GearMenu {id} container={record.container} {anchor} on_action={on_action.clone()} />
            }
        })
    });

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Pill Dispenser"}</h1>
                <DeviceClock />
            </header>

            <SettingsPanel theme={session.theme()} on_action={on_action.clone()} />

            <main class="app-main">
                <Status loaded={session.is_loaded()} />
                <div class="containers-grid">{containers}</div>
            </main>

            if let Some(menu) = gear_menu {
                {menu}
            }

            if let Some(form) = session.schedule_dialog() {
                <ScheduleDialog form={form.clone()} on_action={on_action.clone()} />
            }

            if let Some(form) = session.settings_dialog() {
                <SettingsDialog form={*form} on_action={on_action.clone()} />
            }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
