use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Maps a verified external identity to the internal user record.
///
/// Verification of the identity token happens outside of this crate; the
/// uid handed in here is taken at face value.
pub fn resolve_user<R: UserRepo>(repo: &R, uid: &str) -> Result<User> {
    repo.try_get_user_by_uid(uid)?.ok_or(Error::UserNotFound)
}

/// What a caller wants to do with an event and its proposals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Read,
    Write,
}

/// Single policy evaluator for all event-scoped organizer endpoints.
///
/// The event owner holds every capability. Organization members gain
/// read access; mutations additionally require the organizer role.
pub fn authorize_event_access<R: OrganizationRepo>(
    repo: &R,
    user: &User,
    event: &Event,
    capability: Capability,
) -> Result<()> {
    if event.owner == user.id {
        return Ok(());
    }
    let Some(org_id) = &event.organization else {
        return Err(Error::Forbidden);
    };
    let member = repo
        .get_org_member(org_id.as_str(), user.id.as_str())?
        .ok_or(Error::Forbidden)?;
    match capability {
        Capability::Read => Ok(()),
        Capability::Write => {
            if member.may_manage() {
                Ok(())
            } else {
                Err(Error::Forbidden)
            }
        }
    }
}

pub fn get_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    repo.get_event(id).map_err(|err| match err {
        RepoError::NotFound => Error::EventNotFound,
        err => Error::Repo(err),
    })
}

pub(crate) fn get_talk<R: TalkRepo>(repo: &R, id: &str) -> Result<Talk> {
    repo.get_talk(id).map_err(|err| match err {
        RepoError::NotFound => Error::TalkNotFound,
        err => Error::Repo(err),
    })
}

pub(crate) fn get_proposal_of_event<R: ProposalRepo>(
    repo: &R,
    event: &Event,
    proposal_id: &str,
) -> Result<Proposal> {
    let proposal = repo.get_proposal(proposal_id).map_err(|err| match err {
        RepoError::NotFound => Error::ProposalNotFound,
        err => Error::Repo(err),
    })?;
    // Proposals of other events must stay invisible under this event.
    if proposal.event_id != event.id {
        return Err(Error::ProposalNotFound);
    }
    Ok(proposal)
}

#[cfg(test)]
mod tests {

    use super::{super::tests::MockDb, *};
    use ocfp_entities::builders::Builder;

    fn user() -> User {
        User::build().uid("uid-1").name("Alice").finish()
    }

    #[test]
    fn owner_has_all_capabilities() {
        let db = MockDb::default();
        let user = user();
        let event = Event::build().owner(user.id.as_str()).finish();
        assert!(authorize_event_access(&db, &user, &event, Capability::Read).is_ok());
        assert!(authorize_event_access(&db, &user, &event, Capability::Write).is_ok());
    }

    #[test]
    fn stranger_is_rejected() {
        let db = MockDb::default();
        let user = user();
        let event = Event::build().finish();
        assert!(matches!(
            authorize_event_access(&db, &user, &event, Capability::Read),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn reviewer_may_read_but_not_write() {
        let db = MockDb::default();
        let user = user();
        let org = Organization {
            id: "org".into(),
            name: "org".into(),
        };
        db.add_org_member(&OrganizationMember {
            organization_id: org.id.clone(),
            user_id: user.id.clone(),
            role: MemberRole::Reviewer,
        })
        .unwrap();
        let event = Event::build().organization("org").finish();
        assert!(authorize_event_access(&db, &user, &event, Capability::Read).is_ok());
        assert!(matches!(
            authorize_event_access(&db, &user, &event, Capability::Write),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn organizer_member_may_write() {
        let db = MockDb::default();
        let user = user();
        db.add_org_member(&OrganizationMember {
            organization_id: "org".into(),
            user_id: user.id.clone(),
            role: MemberRole::Organizer,
        })
        .unwrap();
        let event = Event::build().organization("org").finish();
        assert!(authorize_event_access(&db, &user, &event, Capability::Write).is_ok());
    }

    #[test]
    fn unknown_uid_is_not_resolvable() {
        let db = MockDb::default();
        assert!(matches!(
            resolve_user(&db, "nobody"),
            Err(Error::UserNotFound)
        ));
    }
}
