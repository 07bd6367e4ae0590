use crate::calendar::EventSource;
use serde::Deserialize;
use std::collections::BTreeMap;
use time::Date;

time::serde::format_description!(ymd, Date, "[year]-[month]-[day]");

/// A scheduled item on the team calendar.  Events are defined once at
/// startup and never change afterwards; the time range is display text and
/// is not parsed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct Event {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) description: String,
    #[serde(with = "ymd")]
    pub(crate) date: Date,
    pub(crate) time: String,
    pub(crate) location: String,
    #[serde(rename = "type")]
    pub(crate) category: Category,
    #[serde(default)]
    pub(crate) attendees: Vec<String>,
    #[serde(default)]
    pub(crate) project: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Meeting,
    Deadline,
    Milestone,
}

impl Category {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Meeting => "Meeting",
            Category::Deadline => "Deadline",
            Category::Milestone => "Milestone",
        }
    }
}

/// All known events, indexed by calendar day.  Events sharing a day keep the
/// order in which they were supplied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct EventBook {
    by_date: BTreeMap<Date, Vec<Event>>,
}

impl EventBook {
    pub(crate) fn new(events: Vec<Event>) -> EventBook {
        let mut by_date: BTreeMap<Date, Vec<Event>> = BTreeMap::new();
        for ev in events {
            by_date.entry(ev.date).or_default().push(ev);
        }
        EventBook { by_date }
    }

    pub(crate) fn from_json(text: &str) -> serde_json::Result<EventBook> {
        serde_json::from_str::<Vec<Event>>(text).map(EventBook::new)
    }
}

impl EventSource for EventBook {
    fn events_on(&self, date: Date) -> &[Event] {
        self.by_date.get(&date).map_or(&[], Vec::as_slice)
    }
}
