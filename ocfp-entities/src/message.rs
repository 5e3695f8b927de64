use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::*, time::*};

/// Which side of the conversation a message belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum MessageChannel {
    Organizer = 0,
    Speaker = 1,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id          : Id,
    pub proposal_id : Id,
    pub author      : Id,
    pub channel     : MessageChannel,
    pub text        : String,
    pub created_at  : Timestamp,
    pub updated_at  : Option<Timestamp>,
}
