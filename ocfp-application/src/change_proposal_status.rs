use super::*;

pub fn change_proposal_status(
    connections: &sqlite::Connections,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    status: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_proposal_status(conn, uid, event_id, proposal_id, status).map_err(
            |err| {
                warn!(
                    "Failed to change status of proposal {}: {}",
                    proposal_id, err
                );
                err
            },
        )
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use ocfp_core::usecases::Error as ParameterError;

    #[test]
    fn owner_accepts_reviewer_is_rejected() {
        let fixture = BackendFixture::new();
        fixture.create_user("owner", "Olga");
        let reviewer = fixture.create_user("reviewer", "Rita");
        fixture.create_user("speaker", "Sara");
        let talk = fixture.create_talk("speaker", "Borrow checker deep dive");

        let org = flows::create_organization(
            &fixture.db_connections,
            "owner",
            usecases::NewOrganization {
                name: "Rust e.V.".into(),
            },
        )
        .unwrap();
        flows::add_organization_member(
            &fixture.db_connections,
            "owner",
            org.id.as_str(),
            usecases::NewMember {
                user_id: reviewer.id.to_string(),
                role: "reviewer".into(),
            },
        )
        .unwrap();
        let event = fixture.create_event_of_org("owner", org.id.as_str());
        let proposal_id = flows::submit_talk(
            &fixture.db_connections,
            "speaker",
            talk.id.as_str(),
            event.id.as_str(),
            Default::default(),
        )
        .unwrap();

        let err = flows::change_proposal_status(
            &fixture.db_connections,
            "reviewer",
            event.id.as_str(),
            proposal_id.as_str(),
            "accepted",
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(ParameterError::Forbidden))
        ));

        flows::change_proposal_status(
            &fixture.db_connections,
            "owner",
            event.id.as_str(),
            proposal_id.as_str(),
            "accepted",
        )
        .unwrap();
        assert_eq!(
            fixture.get_proposal(proposal_id.as_str()).status,
            ProposalStatus::Accepted
        );
    }
}
