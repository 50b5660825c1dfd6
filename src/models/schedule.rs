use super::container::Container;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub type ScheduleId = i64;

/// Weekday names exactly as the device stores them. Reading ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three letter label for the day toggle buttons.
    pub fn short(&self) -> &'static str {
        &self.name()[..3]
    }

    /// All seven days, Monday first.
    pub fn all() -> &'static [Weekday] {
        &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::all()
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown weekday: {s}"))
    }
}

impl TryFrom<String> for Weekday {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A dosing rule for one container.
///
/// `times` normally holds `pill_count` entries, but nothing enforces it: the
/// dialog saves whatever non-empty time inputs it had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub container: Container,
    pub days: Vec<Weekday>,
    pub pill_count: u32,
    pub times: Vec<String>,
}

impl Schedule {
    pub fn days_label(&self) -> String {
        self.days
            .iter()
            .map(Weekday::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn times_label(&self) -> String {
        self.times.join(", ")
    }

    pub fn covers_every_day(&self) -> bool {
        Weekday::all().iter().all(|day| self.days.contains(day))
    }
}

/// Fields of a schedule the dialog produces; everything except the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    pub container: Container,
    pub days: Vec<Weekday>,
    pub pill_count: u32,
    pub times: Vec<String>,
}

impl ScheduleDraft {
    fn into_schedule(self, id: ScheduleId) -> Schedule {
        Schedule {
            id,
            container: self.container,
            days: self.days,
            pill_count: self.pill_count,
            times: self.times,
        }
    }
}

/// The schedule array as the device stores it.
///
/// Entries that do not read as a [`Schedule`] are kept verbatim in
/// `unreadable` and written back after the readable ones, so a save never
/// drops a record this panel cannot display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleList {
    pub records: Vec<Schedule>,
    pub unreadable: Vec<Value>,
}

impl From<Vec<Schedule>> for ScheduleList {
    fn from(records: Vec<Schedule>) -> Self {
        Self {
            records,
            unreadable: Vec::new(),
        }
    }
}

impl Serialize for ScheduleList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries = Vec::with_capacity(self.records.len() + self.unreadable.len());
        for record in &self.records {
            entries.push(serde_json::to_value(record).map_err(serde::ser::Error::custom)?);
        }
        entries.extend(self.unreadable.iter().cloned());
        entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScheduleList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Value>::deserialize(deserializer)?;
        let mut list = ScheduleList::default();

        for entry in entries {
            match Schedule::deserialize(&entry) {
                Ok(record) => list.records.push(record),
                Err(_) => list.unreadable.push(entry),
            }
        }

        Ok(list)
    }
}

/// Ordered, in-memory collection of schedules, in the order the device sent
/// them followed by local additions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleStore {
    records: Vec<Schedule>,
    unreadable: Vec<Value>,
}

impl ScheduleStore {
    pub fn new(list: ScheduleList) -> Self {
        Self {
            records: list.records,
            unreadable: list.unreadable,
        }
    }

    /// Everything to persist: readable records plus the untouched leftovers.
    pub fn to_list(&self) -> ScheduleList {
        ScheduleList {
            records: self.records.clone(),
            unreadable: self.unreadable.clone(),
        }
    }

    pub fn records(&self) -> &[Schedule] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: ScheduleId) -> Option<&Schedule> {
        self.records.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: ScheduleId) -> bool {
        self.find(id).is_some()
    }

    /// Records for one container, in store order.
    pub fn for_container(&self, container: Container) -> impl Iterator<Item = &Schedule> {
        self.records.iter().filter(move |s| s.container == container)
    }

    /// Picks an id for a new record from a millisecond timestamp, bumping past
    /// the current maximum when the clock would collide.
    pub fn next_id(&self, now_ms: i64) -> ScheduleId {
        match self.records.iter().map(|s| s.id).max() {
            Some(max) if max >= now_ms => max + 1,
            _ => now_ms,
        }
    }

    /// Appends a new record and returns its id.
    pub fn add(&mut self, draft: ScheduleDraft, now_ms: i64) -> ScheduleId {
        let id = self.next_id(now_ms);
        self.records.push(draft.into_schedule(id));
        id
    }

    /// Replaces every field but the id. Returns false when the id is unknown.
    pub fn update(&mut self, id: ScheduleId, draft: ScheduleDraft) -> bool {
        match self.records.iter_mut().find(|s| s.id == id) {
            Some(record) => {
                *record = draft.into_schedule(id);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`. Returns false when nothing was removed.
    pub fn delete(&mut self, id: ScheduleId) -> bool {
        let before = self.records.len();
        self.records.retain(|s| s.id != id);
        self.records.len() != before
    }
}
