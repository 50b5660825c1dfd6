use yew::prelude::*;

use crate::models::settings::Theme;

/// Class the stylesheet keys dark colors on.
const DARK_CLASS: &str = "dark-mode";

/// Keeps the document in sync with the theme stored in the device settings.
#[hook]
pub fn use_theme(theme: Theme) {
    use_effect_with(theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });
}

/// Apply theme to DOM: `data-theme` on <html> and the dark class on <body>
fn apply_theme_to_dom(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(html) = document.document_element() {
        if let Err(e) = html.set_attribute("data-theme", theme.as_str()) {
            web_sys::console::warn_1(&format!("Failed to apply theme: {e:?}").into());
        }
    }

    if let Some(body) = document.body() {
        let classes = body.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1(DARK_CLASS),
            Theme::Light => classes.remove_1(DARK_CLASS),
        };
        if let Err(e) = result {
            web_sys::console::warn_1(&format!("Failed to apply theme: {e:?}").into());
        }
    }
}
