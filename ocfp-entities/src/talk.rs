use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum TalkLevel {
    Beginner = 0,
    Intermediate = 1,
    Advanced = 2,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub id          : Id,
    pub title       : String,
    pub description : Option<String>,
    pub level       : Option<TalkLevel>,
    pub language    : Option<String>,
    pub references  : Option<String>,
    // All co-authors, in insertion order. Never empty.
    pub speakers    : Vec<Id>,
    pub created_at  : Timestamp,
}

impl Talk {
    pub fn has_speaker(&self, user_id: &Id) -> bool {
        self.speakers.iter().any(|id| id == user_id)
    }
}
