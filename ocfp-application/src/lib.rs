#[macro_use]
extern crate log;

mod add_organization_member;
mod change_proposal_status;
mod create_event;
mod create_organization;
mod create_user;
mod messages;
mod rate_proposal;
mod store_talk;
mod submit_talk;

pub mod prelude {
    pub use super::{
        add_organization_member::*, change_proposal_status::*, create_event::*,
        create_organization::*, create_user::*, messages::*, rate_proposal::*, store_talk::*,
        submit_talk::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ocfp_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use ocfp_db_sqlite::Connections;
}
