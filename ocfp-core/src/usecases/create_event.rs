use std::str::FromStr;

use super::{authorize::resolve_user, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title               : String,
    pub description         : Option<String>,
    pub kind                : String,
    pub organization        : Option<String>,
    pub cfp_start           : Option<i64>,
    pub cfp_end             : Option<i64>,
    pub max_proposals       : Option<u32>,
    pub formats_required    : bool,
    pub categories_required : bool,
    pub formats             : Vec<String>,
    pub categories          : Vec<String>,
}

pub fn create_event<R>(repo: &R, uid: &str, new_event: NewEvent) -> Result<Event>
where
    R: UserRepo + EventRepo + OrganizationRepo,
{
    let NewEvent {
        title,
        description,
        kind,
        organization,
        cfp_start,
        cfp_end,
        max_proposals,
        formats_required,
        categories_required,
        formats,
        categories,
    } = new_event;
    let user = resolve_user(repo, uid)?;
    let title = title.trim().to_owned();
    if title.is_empty() {
        return Err(Error::Title);
    }
    let kind = EventKind::from_str(&kind).map_err(|_| Error::EventKind)?;
    if let (Some(start), Some(end)) = (cfp_start, cfp_end) {
        if end < start {
            return Err(Error::CfpEndBeforeStart);
        }
    }
    let organization = organization
        .map(|org_id| {
            let org = repo.get_org(&org_id).map_err(|err| match err {
                crate::repositories::Error::NotFound => Error::OrganizationNotFound,
                err => Error::Repo(err),
            })?;
            // Delegated event creation requires management rights.
            let member = repo
                .get_org_member(org.id.as_str(), user.id.as_str())?
                .ok_or(Error::Forbidden)?;
            if !member.may_manage() {
                return Err(Error::Forbidden);
            }
            Ok(org.id)
        })
        .transpose()?;
    let formats = formats
        .into_iter()
        .map(|name| EventFormat {
            id: Id::new(),
            name,
        })
        .collect();
    let categories = categories
        .into_iter()
        .map(|name| EventCategory {
            id: Id::new(),
            name,
        })
        .collect();
    let event = Event {
        id: Id::new(),
        title,
        description,
        kind,
        owner: user.id,
        organization,
        cfp_start: cfp_start.map(Timestamp::from_secs),
        cfp_end: cfp_end.map(Timestamp::from_secs),
        max_proposals,
        formats_required,
        categories_required,
        formats,
        categories,
        created_at: Timestamp::now(),
    };
    log::debug!("Storing newly created event: {:?}", event);
    repo.create_event(event.clone())?;
    Ok(event)
}
