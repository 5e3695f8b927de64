use super::*;

pub fn rate_proposal(
    connections: &sqlite::Connections,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    new_rating: usecases::NewRating,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::rate_proposal(conn, uid, event_id, proposal_id, new_rating).map_err(|err| {
            warn!("Failed to rate proposal {}: {}", proposal_id, err);
            err
        })
    })?)
}
