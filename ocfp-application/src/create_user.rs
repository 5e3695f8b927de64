use super::*;

pub fn create_user(
    connections: &sqlite::Connections,
    uid: &str,
    new_user: usecases::NewUser,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, uid, new_user).map_err(|err| {
            warn!("Failed to register user {}: {}", uid, err);
            err
        })
    })?)
}
