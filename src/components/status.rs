use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loaded: bool,
}

/// Spinner shown until the first load from the device has finished.
/// A failed load still counts as finished; the tables are just empty.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loaded {
        return html! {};
    }

    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"Loading schedules..."}</p>
        </div>
    }
}
