use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    /// Fixed-date event with an explicit call-for-papers window.
    Conference = 0,
    /// Recurring series without a fixed window.
    Meetup = 1,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormat {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCategory {
    pub id: Id,
    pub name: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id                  : Id,
    pub title               : String,
    pub description         : Option<String>,
    pub kind                : EventKind,
    /// The user that created the event.
    pub owner               : Id,
    pub organization        : Option<Id>,
    // Both window time stamps are stored with second precision!
    pub cfp_start           : Option<Timestamp>,
    pub cfp_end             : Option<Timestamp>,
    pub max_proposals       : Option<u32>,
    pub formats_required    : bool,
    pub categories_required : bool,
    pub formats             : Vec<EventFormat>,
    pub categories          : Vec<EventCategory>,
    pub created_at          : Timestamp,
}

impl Event {
    /// Whether submissions are permitted at the given instant.
    ///
    /// Conferences only accept submissions within their configured window;
    /// a conference without both bounds has not opened its call for papers.
    /// Meetups accept submissions at any time.
    pub fn is_cfp_open(&self, now: Timestamp) -> bool {
        match self.kind {
            EventKind::Conference => match (self.cfp_start, self.cfp_end) {
                (Some(start), Some(end)) => start <= now && now <= end,
                _ => false,
            },
            EventKind::Meetup => true,
        }
    }
}
