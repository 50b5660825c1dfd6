//! Application state for one page session.
//!
//! Every user interaction is an [`Action`]. [`Session::apply`] mutates the
//! state synchronously and hands back the network [`Effect`] the caller has to
//! run, so the view always reflects local state before anything is persisted.

use super::container::Container;
use super::forms::{DialogMode, ScheduleForm, SettingsForm};
use super::menu::{MenuAnchor, MenuState};
use super::schedule::{ScheduleId, ScheduleList, ScheduleStore, Weekday};
use super::settings::{SettingsMap, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Schedule dialog
    OpenAddSchedule(Container),
    OpenEditSchedule {
        id: ScheduleId,
        container: Container,
    },
    CloseScheduleDialog,
    ToggleDay(Weekday),
    ToggleEveryDay,
    IncrementPills,
    DecrementPills,
    SetTime { index: usize, value: String },
    SaveSchedule,
    DeleteSchedule(ScheduleId),

    // Settings dialog
    OpenSettings(Container),
    CloseSettings,
    SetMotorSpeed(u32),
    SetTriggerThreshold(u32),
    SaveSettings,
    TestMotor,

    ToggleTheme,

    // Row menus
    ToggleMenu {
        id: ScheduleId,
        anchor: Option<MenuAnchor>,
    },
    CloseMenus,
}

/// One-shot motor test with the values currently shown in the settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorTest {
    pub container: Container,
    pub motor_speed: u32,
    pub trigger_threshold: u32,
}

/// Network work requested by an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SaveSchedules(ScheduleList),
    SaveSettings(SettingsMap),
    TestMotor(MotorTest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    schedules: ScheduleStore,
    settings: SettingsMap,
    schedule_dialog: Option<ScheduleForm>,
    settings_dialog: Option<SettingsForm>,
    menu: MenuState,
    loaded: bool,
}

impl Session {
    /// Replaces both stores with freshly loaded data. Nothing is merged.
    pub fn hydrate(&mut self, schedules: ScheduleList, settings: SettingsMap) {
        self.schedules = ScheduleStore::new(schedules);
        self.settings = settings;
        self.menu.close_all();
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn schedules(&self) -> &ScheduleStore {
        &self.schedules
    }

    pub fn settings(&self) -> &SettingsMap {
        &self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn schedule_dialog(&self) -> Option<&ScheduleForm> {
        self.schedule_dialog.as_ref()
    }

    pub fn settings_dialog(&self) -> Option<&SettingsForm> {
        self.settings_dialog.as_ref()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Applies one action. `now_ms` is the wall clock, used for new ids.
    pub fn apply(&mut self, action: Action, now_ms: i64) -> Option<Effect> {
        match action {
            Action::OpenAddSchedule(container) => {
                self.schedule_dialog = Some(ScheduleForm::for_add(container));
                None
            }
            Action::OpenEditSchedule { id, container } => {
                self.menu.close_all();
                let form = match self.schedules.find(id) {
                    Some(record) => ScheduleForm::for_edit(record),
                    None => ScheduleForm::for_missing(id, container),
                };
                self.schedule_dialog = Some(form);
                None
            }
            Action::CloseScheduleDialog => {
                self.schedule_dialog = None;
                None
            }
            Action::ToggleDay(day) => {
                self.edit_schedule_form(|form| form.toggle_day(day));
                None
            }
            Action::ToggleEveryDay => {
                self.edit_schedule_form(ScheduleForm::toggle_every_day);
                None
            }
            Action::IncrementPills => {
                self.edit_schedule_form(ScheduleForm::increment_pills);
                None
            }
            Action::DecrementPills => {
                self.edit_schedule_form(ScheduleForm::decrement_pills);
                None
            }
            Action::SetTime { index, value } => {
                self.edit_schedule_form(|form| form.set_time(index, value));
                None
            }
            Action::SaveSchedule => self.save_schedule(now_ms),
            Action::DeleteSchedule(id) => Some(self.delete_schedule(id)),

            Action::OpenSettings(container) => {
                self.menu.close_all();
                self.settings_dialog = Some(SettingsForm::open(container, &self.settings));
                None
            }
            Action::CloseSettings => {
                self.settings_dialog = None;
                None
            }
            Action::SetMotorSpeed(value) => {
                if let Some(form) = self.settings_dialog.as_mut() {
                    form.set_motor_speed(value);
                }
                None
            }
            Action::SetTriggerThreshold(value) => {
                if let Some(form) = self.settings_dialog.as_mut() {
                    form.set_trigger_threshold(value);
                }
                None
            }
            Action::SaveSettings => {
                let form = self.settings_dialog.take()?;
                self.settings.set(form.container(), form.values());
                Some(Effect::SaveSettings(self.settings.clone()))
            }
            Action::TestMotor => {
                let form = self.settings_dialog.as_ref()?;
                let values = form.values();
                Some(Effect::TestMotor(MotorTest {
                    container: form.container(),
                    motor_speed: values.motor_speed,
                    trigger_threshold: values.trigger_threshold,
                }))
            }

            Action::ToggleTheme => {
                self.settings.set_theme(self.theme().toggled());
                Some(Effect::SaveSettings(self.settings.clone()))
            }

            Action::ToggleMenu { id, anchor } => {
                self.menu.toggle(id, anchor);
                None
            }
            Action::CloseMenus => {
                self.menu.close_all();
                None
            }
        }
    }

    fn edit_schedule_form(&mut self, edit: impl FnOnce(&mut ScheduleForm)) {
        if let Some(form) = self.schedule_dialog.as_mut() {
            edit(form);
        }
    }

    fn save_schedule(&mut self, now_ms: i64) -> Option<Effect> {
        let form = self.schedule_dialog.take()?;
        let draft = form.draft();
        match form.mode() {
            DialogMode::Add => {
                self.schedules.add(draft, now_ms);
            }
            DialogMode::Edit(id) => {
                self.schedules.update(id, draft);
            }
        }
        Some(self.persist_schedules())
    }

    fn delete_schedule(&mut self, id: ScheduleId) -> Effect {
        self.schedules.delete(id);
        let schedules = &self.schedules;
        self.menu.retain(|open| schedules.contains(open));
        self.persist_schedules()
    }

    fn persist_schedules(&self) -> Effect {
        Effect::SaveSchedules(self.schedules.to_list())
    }
}
