use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::*, talk::TalkLevel, time::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ProposalStatus {
    Submitted = 0,
    Accepted = 1,
    Rejected = 2,
}

/// An event-scoped snapshot of a talk.
///
/// The content fields are copied from the talk at submission time and only
/// change on resubmission. Organizers always grade a stable snapshot, not
/// the live talk.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id          : Id,
    pub talk_id     : Id,
    pub event_id    : Id,
    pub title       : String,
    pub description : Option<String>,
    pub level       : Option<TalkLevel>,
    pub language    : Option<String>,
    pub references  : Option<String>,
    /// Free-form note from the speaker to the organizers.
    pub comments    : Option<String>,
    pub status      : ProposalStatus,
    // Copied from the talk at submission time, not live-linked.
    pub speakers    : Vec<Id>,
    pub formats     : Vec<Id>,
    pub categories  : Vec<Id>,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

impl Proposal {
    pub fn has_speaker(&self, user_id: &Id) -> bool {
        self.speakers.iter().any(|id| id == user_id)
    }
}
