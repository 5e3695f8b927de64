use super::*;

pub fn submit_talk(
    connections: &sqlite::Connections,
    uid: &str,
    talk_id: &str,
    event_id: &str,
    submission: usecases::SubmitTalk,
) -> Result<Id> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::submit_talk(conn, uid, talk_id, event_id, submission).map_err(|err| {
            warn!(
                "Failed to submit talk {} to event {}: {}",
                talk_id, event_id, err
            );
            err
        })
    })?)
}

pub fn unsubmit_talk(
    connections: &sqlite::Connections,
    uid: &str,
    talk_id: &str,
    event_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unsubmit_talk(conn, uid, talk_id, event_id).map_err(|err| {
            warn!(
                "Failed to unsubmit talk {} from event {}: {}",
                talk_id, event_id, err
            );
            err
        })
    })?)
}
