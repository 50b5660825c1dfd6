use yew::prelude::*;

use crate::models::settings::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Theme toggle button; the label names the mode a click switches to
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let label = match props.theme {
        Theme::Dark => "Light Mode",
        Theme::Light => "Dark Mode",
    };

    let onclick = {
        let toggle = props.on_toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            id="toggleDarkButton"
            {onclick}
            aria-label={label}
            title={label}
        >
            {label}
        </button>
    }
}
