// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn get_user_by_uid(&self, uid: &str) -> Result<User>;
    fn try_get_user_by_uid(&self, uid: &str) -> Result<Option<User>>;
}

pub trait TalkRepo {
    fn create_talk(&self, talk: Talk) -> Result<()>;
    fn update_talk(&self, talk: &Talk) -> Result<()>;

    // Loaded with the full speaker set
    fn get_talk(&self, id: &str) -> Result<Talk>;
    fn talks_of_speaker(&self, user_id: &str) -> Result<Vec<Talk>>;
}

pub trait EventRepo {
    fn create_event(&self, event: Event) -> Result<()>;

    // Loaded with formats and categories
    fn get_event(&self, id: &str) -> Result<Event>;
    fn all_events_chronologically(&self) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;
}

pub trait OrganizationRepo {
    fn create_org(&self, org: Organization) -> Result<()>;
    fn get_org(&self, id: &str) -> Result<Organization>;

    fn add_org_member(&self, member: &OrganizationMember) -> Result<()>;
    fn get_org_member(&self, org_id: &str, user_id: &str)
        -> Result<Option<OrganizationMember>>;
}

pub trait ProposalRepo {
    fn create_proposal(&self, proposal: Proposal) -> Result<()>;
    fn update_proposal(&self, proposal: &Proposal) -> Result<()>;
    fn update_proposal_status(&self, id: &str, status: ProposalStatus) -> Result<()>;
    fn delete_proposal(&self, id: &str) -> Result<()>;

    // Loaded with speakers, formats and categories
    fn get_proposal(&self, id: &str) -> Result<Proposal>;
    fn get_proposal_of_talk(&self, talk_id: &str, event_id: &str) -> Result<Option<Proposal>>;
    fn proposals_of_event(&self, event_id: &str) -> Result<Vec<Proposal>>;
    fn proposals_of_speaker(&self, event_id: &str, user_id: &str) -> Result<Vec<Proposal>>;
}

pub trait RatingRepo {
    // Insert or replace by the unique (user, proposal) key
    fn upsert_rating(&self, rating: Rating) -> Result<()>;
    // Deleting a non-existing rating is not an error
    fn delete_rating(&self, user_id: &str, proposal_id: &str) -> Result<()>;

    fn get_rating(&self, user_id: &str, proposal_id: &str) -> Result<Option<Rating>>;
    fn ratings_of_proposal(&self, proposal_id: &str) -> Result<Vec<Rating>>;
}

pub trait MessageRepo {
    fn create_message(&self, message: Message) -> Result<()>;
    fn update_message(&self, message: &Message) -> Result<()>;
    fn delete_message(&self, id: &str) -> Result<()>;

    fn get_message(&self, id: &str) -> Result<Message>;
    fn messages_of_proposal(&self, proposal_id: &str) -> Result<Vec<Message>>;
}
