use super::{
    authorize::{get_event, get_proposal_of_event, resolve_user},
    authorize_event_access, Capability,
    prelude::*,
};

/// Moves a proposal through the selection workflow.
///
/// Requires the write capability on the event, so reviewer-role members
/// are rejected even though they may read the proposal.
pub fn change_proposal_status<R>(
    repo: &R,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    status: &str,
) -> Result<()>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    authorize_event_access(repo, &user, &event, Capability::Write)?;
    let proposal = get_proposal_of_event(repo, &event, proposal_id)?;
    let status = status
        .parse::<ProposalStatus>()
        .map_err(|_| Error::ProposalStatus)?;
    log::debug!("Changing status of proposal {} to {}", proposal.id, status);
    Ok(repo.update_proposal_status(proposal.id.as_str(), status)?)
}

#[cfg(test)]
mod tests {

    use super::{super::tests::MockDb, *};
    use ocfp_entities::builders::Builder;

    fn fixture() -> (MockDb, Event, Proposal) {
        let db = MockDb::default();
        let owner = User::build().uid("owner").name("Olga").finish();
        db.create_user(&owner).unwrap();
        let event = Event::build()
            .owner(owner.id.as_str())
            .organization("org")
            .finish();
        db.create_event(event.clone()).unwrap();
        let proposal = Proposal::build().event(event.id.as_str()).finish();
        db.create_proposal(proposal.clone()).unwrap();
        (db, event, proposal)
    }

    #[test]
    fn owner_accepts_a_proposal() {
        let (db, event, proposal) = fixture();
        change_proposal_status(
            &db,
            "owner",
            event.id.as_str(),
            proposal.id.as_str(),
            "accepted",
        )
        .unwrap();
        assert_eq!(
            db.get_proposal(proposal.id.as_str()).unwrap().status,
            ProposalStatus::Accepted
        );
    }

    #[test]
    fn reviewer_must_not_change_the_status() {
        let (db, event, proposal) = fixture();
        let reviewer = User::build().uid("reviewer").name("Rita").finish();
        db.create_user(&reviewer).unwrap();
        db.add_org_member(&OrganizationMember {
            organization_id: "org".into(),
            user_id: reviewer.id.clone(),
            role: MemberRole::Reviewer,
        })
        .unwrap();

        let result = change_proposal_status(
            &db,
            "reviewer",
            event.id.as_str(),
            proposal.id.as_str(),
            "accepted",
        );
        assert!(matches!(result, Err(Error::Forbidden)));
        assert_eq!(
            db.get_proposal(proposal.id.as_str()).unwrap().status,
            ProposalStatus::Submitted
        );
    }

    #[test]
    fn unknown_status_is_invalid() {
        let (db, event, proposal) = fixture();
        let result = change_proposal_status(
            &db,
            "owner",
            event.id.as_str(),
            proposal.id.as_str(),
            "maybe",
        );
        assert!(matches!(result, Err(Error::ProposalStatus)));
    }
}
