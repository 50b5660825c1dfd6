use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Creates a document-wide click listener that fires `callback` whenever the
/// click landed outside every element matching `selector`.
///
/// Clicks on detached nodes or non-element targets count as outside.
///
/// # Returns
///
/// An `EventListener` that must be kept alive for the duration of the component lifecycle.
/// When dropped, the listener is automatically cleaned up.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with((), move |_| {
///     let listener = create_outside_click_listener(".gear-menu, .gear-icon", move || {
///         dispatch.emit(Action::CloseMenus);
///     });
///
///     move || drop(listener)
/// });
/// ```
pub fn create_outside_click_listener<F>(selector: &'static str, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let document = web_sys::window()?.document()?;

    Some(EventListener::new(&document, "click", move |event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest(selector).ok().flatten())
            .is_some();

        if !inside {
            callback();
        }
    }))
}
