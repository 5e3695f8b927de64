use super::*;

pub fn create_talk(
    connections: &sqlite::Connections,
    uid: &str,
    new_talk: usecases::NewTalk,
) -> Result<Talk> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_talk(conn, uid, new_talk).map_err(|err| {
            warn!("Failed to create talk for user {}: {}", uid, err);
            err
        })
    })?)
}

pub fn update_talk(
    connections: &sqlite::Connections,
    uid: &str,
    talk_id: &str,
    new_talk: usecases::NewTalk,
) -> Result<Talk> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_talk(conn, uid, talk_id, new_talk).map_err(|err| {
            warn!("Failed to update talk {}: {}", talk_id, err);
            err
        })
    })?)
}
