use super::*;
use ocfp_entities as e;

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id, name, email, ..
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
        }
    }
}

impl From<e::talk::Talk> for Talk {
    fn from(from: e::talk::Talk) -> Self {
        let e::talk::Talk {
            id,
            title,
            description,
            level,
            language,
            references,
            speakers,
            created_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            level: level.map(|level| level.to_string()),
            language,
            references,
            speakers: speakers.into_iter().map(Into::into).collect(),
            created_at: created_at.as_secs(),
        }
    }
}

impl From<e::event::EventFormat> for EventFormat {
    fn from(from: e::event::EventFormat) -> Self {
        let e::event::EventFormat { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::event::EventCategory> for EventCategory {
    fn from(from: e::event::EventCategory) -> Self {
        let e::event::EventCategory { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl Event {
    /// The CfP window depends on the wall clock, so the projection is
    /// computed against an explicit instant instead of implementing `From`.
    pub fn from_event_with_now(from: e::event::Event, now: e::time::Timestamp) -> Self {
        let cfp_open = from.is_cfp_open(now);
        let e::event::Event {
            id,
            title,
            description,
            kind,
            cfp_start,
            cfp_end,
            max_proposals,
            formats_required,
            categories_required,
            formats,
            categories,
            ..
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            kind: kind.to_string(),
            cfp_start: cfp_start.map(e::time::Timestamp::as_secs),
            cfp_end: cfp_end.map(e::time::Timestamp::as_secs),
            cfp_open,
            max_proposals,
            formats_required,
            categories_required,
            formats: formats.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::proposal::Proposal> for Proposal {
    fn from(from: e::proposal::Proposal) -> Self {
        let e::proposal::Proposal {
            id,
            talk_id,
            title,
            description,
            level,
            language,
            references,
            comments,
            status,
            speakers,
            formats,
            categories,
            created_at,
            updated_at,
            ..
        } = from;
        Self {
            id: id.into(),
            talk_id: talk_id.into(),
            title,
            description,
            level: level.map(|level| level.to_string()),
            language,
            references,
            comments,
            status: status.to_string(),
            speakers: speakers.into_iter().map(Into::into).collect(),
            formats: formats.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
            created_at: created_at.as_secs(),
            updated_at: updated_at.as_secs(),
        }
    }
}

impl From<e::rating::Rating> for Rating {
    fn from(from: e::rating::Rating) -> Self {
        let e::rating::Rating { value, feeling, .. } = from;
        Self {
            rating: value.into(),
            feeling: feeling.to_string(),
        }
    }
}

impl From<e::message::Message> for Message {
    fn from(from: e::message::Message) -> Self {
        let e::message::Message {
            id,
            author,
            channel,
            text,
            created_at,
            updated_at,
            ..
        } = from;
        Self {
            id: id.into(),
            author: author.into(),
            channel: channel.to_string(),
            text,
            created_at: created_at.as_secs(),
            updated_at: updated_at.map(e::time::Timestamp::as_secs),
        }
    }
}

impl From<e::organization::Organization> for Organization {
    fn from(from: e::organization::Organization) -> Self {
        let e::organization::Organization { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}
