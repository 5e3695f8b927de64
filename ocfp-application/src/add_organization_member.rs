use super::*;

pub fn add_organization_member(
    connections: &sqlite::Connections,
    uid: &str,
    org_id: &str,
    new_member: usecases::NewMember,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_organization_member(conn, uid, org_id, new_member).map_err(|err| {
            warn!("Failed to add member to organization {}: {}", org_id, err);
            err
        })
    })?)
}
