use chrono::Utc;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::session::{Action, Effect, Session};
use crate::services::device_api::{
    load_schedules, load_settings, save_schedules, save_settings, test_motor,
};
use crate::utils::create_outside_click_listener;

/// Elements whose clicks must not close the open row menu.
const MENU_SELECTOR: &str = ".gear-menu, .gear-icon";

/// Handle returned by `use_session` hook
#[derive(Clone)]
pub struct SessionHandle {
    state: Rc<RefCell<Session>>,
    pub dispatch: Callback<Action>,
}

impl SessionHandle {
    pub fn session(&self) -> Ref<'_, Session> {
        self.state.borrow()
    }
}

/// Owns the page session: loads both stores once, routes every action through
/// a single dispatcher and runs the resulting network effects in the background.
#[hook]
pub fn use_session() -> SessionHandle {
    // Shared cell so handlers registered once (document listeners) still see
    // the latest state.
    let state = use_mut_ref(Session::default);
    let force_update = use_force_update();

    let dispatch = {
        let state = state.clone();
        let force_update = force_update.clone();
        Callback::from(move |action: Action| {
            let effect = state
                .borrow_mut()
                .apply(action, Utc::now().timestamp_millis());
            force_update.force_update();

            if let Some(effect) = effect {
                spawn_local(run_effect(effect));
            }
        })
    };

    // Effect: Load schedules then settings, replacing whatever was there
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let schedules = load_schedules().await;
                let settings = load_settings().await;
                state.borrow_mut().hydrate(schedules, settings);
                force_update.force_update();
            });

            || ()
        });
    }

    // Effect: Close the open row menu on clicks anywhere else
    {
        let state = state.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let listener = create_outside_click_listener(MENU_SELECTOR, move || {
                let menu_open = state.borrow().menu().open_menu().is_some();
                if menu_open {
                    dispatch.emit(Action::CloseMenus);
                }
            });

            move || drop(listener)
        });
    }

    SessionHandle { state, dispatch }
}

async fn run_effect(effect: Effect) {
    match effect {
        Effect::SaveSchedules(schedules) => save_schedules(schedules).await,
        Effect::SaveSettings(settings) => save_settings(settings).await,
        Effect::TestMotor(test) => test_motor(test).await,
    }
}
