use yew::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::models::{container::Container, session::Action, settings::Theme};

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub theme: Theme,
    pub on_action: Callback<Action>,
}

/// Collapsible panel with the theme toggle and per-container settings buttons.
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let expanded = use_state(|| false);

    let on_header = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let on_theme = {
        let on_action = props.on_action.clone();
        Callback::from(move |()| on_action.emit(Action::ToggleTheme))
    };

    let container_buttons = Container::all()
        .iter()
        .map(|&container| {
            let on_action = props.on_action.clone();
            let onclick =
                Callback::from(move |_: MouseEvent| on_action.emit(Action::OpenSettings(container)));
            html! {
                <button
                    class="container-settings"
                    style={format!("background-color: {};", container.color())}
                    {onclick}
                >
                    {format!("{container} Settings")}
                </button>
            }
        })
        .collect::<Html>();

    let arrow = if *expanded { "▴" } else { "▾" };

    html! {
        <div class="settings-panel-wrapper">
            <div class="collapsible-header" onclick={on_header}>
                {format!("Settings {arrow}")}
            </div>
            if *expanded {
                <div class="settings-panel" id="settingsPanel">
                    <ThemeToggle theme={props.theme} on_toggle={on_theme} />
                    {container_buttons}
                </div>
            }
        </div>
    }
}
