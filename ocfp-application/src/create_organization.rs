use super::*;

pub fn create_organization(
    connections: &sqlite::Connections,
    uid: &str,
    new_org: usecases::NewOrganization,
) -> Result<Organization> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_organization(conn, uid, new_org).map_err(|err| {
            warn!("Failed to create organization for user {}: {}", uid, err);
            err
        })
    })?)
}
