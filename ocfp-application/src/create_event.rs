use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    uid: &str,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_event(conn, uid, new_event).map_err(|err| {
            warn!("Failed to create event for user {}: {}", uid, err);
            err
        })
    })?)
}
