//! Form state behind the two modal dialogs.
//!
//! Both forms are plain data: the dialog components render them and turn
//! input events into session actions, and the session calls into these
//! methods.

use super::container::Container;
use super::schedule::{Schedule, ScheduleDraft, ScheduleId, Weekday};
use super::settings::{MotorSettings, SettingsMap};
use crate::config::Config;
use std::collections::BTreeSet;

/// Whether the schedule dialog creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit(ScheduleId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleForm {
    mode: DialogMode,
    container: Container,
    every_day: bool,
    days: BTreeSet<Weekday>,
    pill_count: u32,
    times: Vec<String>,
}

impl ScheduleForm {
    /// Blank form: no days, one pill at the default time.
    pub fn for_add(container: Container) -> Self {
        Self {
            mode: DialogMode::Add,
            container,
            every_day: false,
            days: BTreeSet::new(),
            pill_count: 1,
            times: default_times(1),
        }
    }

    /// Form populated from a stored record.
    ///
    /// A record covering all seven days lights up "every day" and the seven
    /// individual toggles together. Stored times fill the regenerated inputs
    /// by position; surplus times are dropped and missing ones keep the default.
    pub fn for_edit(record: &Schedule) -> Self {
        let pill_count = record.pill_count.max(1);
        let mut times = default_times(pill_count);
        for (slot, stored) in times.iter_mut().zip(&record.times) {
            slot.clone_from(stored);
        }

        Self {
            mode: DialogMode::Edit(record.id),
            container: record.container,
            every_day: record.covers_every_day(),
            days: record.days.iter().copied().collect(),
            pill_count,
            times,
        }
    }

    /// Edit form for an id the store does not know; saving it only re-persists.
    pub fn for_missing(id: ScheduleId, container: Container) -> Self {
        Self {
            mode: DialogMode::Edit(id),
            ..Self::for_add(container)
        }
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add Schedule",
            DialogMode::Edit(_) => "Edit Schedule",
        }
    }

    pub fn every_day(&self) -> bool {
        self.every_day
    }

    pub fn is_day_active(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn pill_count(&self) -> u32 {
        self.pill_count
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        if !self.days.remove(&day) {
            self.days.insert(day);
        }
    }

    /// Turning "every day" on clears the individual toggles; turning it off
    /// leaves them as they are.
    pub fn toggle_every_day(&mut self) {
        self.every_day = !self.every_day;
        if self.every_day {
            self.days.clear();
        }
    }

    /// Adds a dose. Every time input is regenerated at the default value.
    pub fn increment_pills(&mut self) {
        self.set_pill_count(self.pill_count.saturating_add(1));
    }

    /// Removes a dose, never going below one. Always regenerates the inputs.
    pub fn decrement_pills(&mut self) {
        self.set_pill_count(self.pill_count.saturating_sub(1));
    }

    fn set_pill_count(&mut self, count: u32) {
        self.pill_count = count.max(1);
        self.times = default_times(self.pill_count);
    }

    /// Stores the raw value of time input `index`; out of range indexes are ignored.
    pub fn set_time(&mut self, index: usize, value: String) {
        if let Some(slot) = self.times.get_mut(index) {
            *slot = value;
        }
    }

    /// Record fields as they would be saved. "Every day" wins over any
    /// individual toggles still shown as active.
    pub fn draft(&self) -> ScheduleDraft {
        let days = if self.every_day {
            Weekday::all().to_vec()
        } else {
            self.days.iter().copied().collect()
        };

        ScheduleDraft {
            container: self.container,
            days,
            pill_count: self.pill_count,
            times: self
                .times
                .iter()
                .filter(|t| !t.is_empty())
                .cloned()
                .collect(),
        }
    }
}

fn default_times(count: u32) -> Vec<String> {
    (0..count)
        .map(|_| Config::DEFAULT_DOSE_TIME.to_string())
        .collect()
}

/// Slider state of the settings dialog for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    container: Container,
    values: MotorSettings,
}

impl SettingsForm {
    /// Starts from the stored values, pulled into the slider ranges the same
    /// way a range input would show them.
    pub fn open(container: Container, settings: &SettingsMap) -> Self {
        let stored = settings.get_or_default(container);
        let mut form = Self {
            container,
            values: stored,
        };
        form.set_motor_speed(stored.motor_speed);
        form.set_trigger_threshold(stored.trigger_threshold);
        form
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn title(&self) -> String {
        format!("{} Settings", self.container)
    }

    pub fn values(&self) -> MotorSettings {
        self.values
    }

    pub fn set_motor_speed(&mut self, value: u32) {
        let (min, max) = Config::MOTOR_SPEED_RANGE;
        self.values.motor_speed = value.clamp(min, max);
    }

    pub fn set_trigger_threshold(&mut self, value: u32) {
        let (min, max) = Config::TRIGGER_THRESHOLD_RANGE;
        self.values.trigger_threshold = value.clamp(min, max);
    }
}
