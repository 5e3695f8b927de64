mod add_organization_member;
mod authorize;
mod change_proposal_status;
mod create_event;
mod create_organization;
mod error;
mod messages;
mod rate_proposal;
mod register_user;
mod store_talk;
mod submit_talk;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    add_organization_member::*, authorize::*, change_proposal_status::*, create_event::*,
    create_organization::*, error::Error, messages::*, rate_proposal::*, register_user::*,
    store_talk::*, submit_talk::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_current_user<R: UserRepo>(repo: &R, uid: &str) -> Result<User> {
    resolve_user(repo, uid)
}

pub fn all_events<R: EventRepo>(repo: &R) -> Result<Vec<Event>> {
    Ok(repo.all_events_chronologically()?)
}
