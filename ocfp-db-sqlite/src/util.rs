use anyhow::anyhow;
use num_traits::FromPrimitive as _;

use ocfp_core::{entities::*, repositories as repo};

type Result<T> = std::result::Result<T, repo::Error>;

// Enum encodings are plain `as i16` casts; the helpers below only exist for
// the lossy direction when loading rows.

pub fn talk_level_from_i16(value: i16) -> Result<TalkLevel> {
    TalkLevel::from_i16(value).ok_or_else(|| anyhow!("Invalid talk level: {}", value).into())
}

pub fn event_kind_from_i16(value: i16) -> Result<EventKind> {
    EventKind::from_i16(value).ok_or_else(|| anyhow!("Invalid event kind: {}", value).into())
}

pub fn member_role_from_i16(value: i16) -> Result<MemberRole> {
    MemberRole::from_i16(value).ok_or_else(|| anyhow!("Invalid member role: {}", value).into())
}

pub fn proposal_status_from_i16(value: i16) -> Result<ProposalStatus> {
    ProposalStatus::from_i16(value)
        .ok_or_else(|| anyhow!("Invalid proposal status: {}", value).into())
}

pub fn feeling_from_i16(value: i16) -> Result<Feeling> {
    Feeling::from_i16(value).ok_or_else(|| anyhow!("Invalid feeling: {}", value).into())
}

pub fn message_channel_from_i16(value: i16) -> Result<MessageChannel> {
    MessageChannel::from_i16(value)
        .ok_or_else(|| anyhow!("Invalid message channel: {}", value).into())
}
