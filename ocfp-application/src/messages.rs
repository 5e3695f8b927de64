use super::*;

pub fn post_message(
    connections: &sqlite::Connections,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    channel: MessageChannel,
    new_message: usecases::NewMessage,
) -> Result<Id> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::post_message(conn, uid, event_id, proposal_id, channel, new_message).map_err(
            |err| {
                warn!("Failed to post message to proposal {}: {}", proposal_id, err);
                err
            },
        )
    })?)
}

pub fn edit_message(
    connections: &sqlite::Connections,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    message_id: &str,
    new_message: usecases::NewMessage,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::edit_message(conn, uid, event_id, proposal_id, message_id, new_message).map_err(
            |err| {
                warn!("Failed to edit message {}: {}", message_id, err);
                err
            },
        )
    })?)
}

pub fn delete_message(
    connections: &sqlite::Connections,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    message_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_message(conn, uid, event_id, proposal_id, message_id).map_err(|err| {
            warn!("Failed to delete message {}: {}", message_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use ocfp_core::usecases::Error as ParameterError;

    #[test]
    fn foreign_messages_stay_invisible() {
        let fixture = BackendFixture::new();
        fixture.create_user("owner", "Olga");
        let other = fixture.create_user("other", "Oscar");
        fixture.create_user("speaker", "Sara");
        let talk = fixture.create_talk("speaker", "Talk");

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
                user_id: other.id.to_string(),
                role: "organizer".into(),
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
        let message_id = flows::post_message(
            &fixture.db_connections,
            "owner",
            event.id.as_str(),
            proposal_id.as_str(),
            MessageChannel::Organizer,
            usecases::NewMessage {
                text: "please add an outline".into(),
            },
        )
        .unwrap();

        // A fellow organizer sees the proposal but must not touch the
        // other user's message.
        let err = flows::delete_message(
            &fixture.db_connections,
            "other",
            event.id.as_str(),
            proposal_id.as_str(),
            message_id.as_str(),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(ParameterError::MessageNotFound))
        ));
    }
}
