// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use ocfp_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod event;
mod message;
mod org;
mod proposal;
mod rating;
mod talk;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Error type for inner transactions. Diesel demands `From<DieselError>`
// for the closure's error type, which cannot be implemented for the
// repository error of a foreign crate.
enum TransactionError {
    Repo(repo::Error),
    Diesel(DieselError),
}

impl From<repo::Error> for TransactionError {
    fn from(err: repo::Error) -> Self {
        Self::Repo(err)
    }
}

impl From<DieselError> for TransactionError {
    fn from(err: DieselError) -> Self {
        Self::Diesel(err)
    }
}

fn commit_err(err: TransactionError) -> repo::Error {
    match err {
        TransactionError::Repo(err) => err,
        TransactionError::Diesel(err) => from_diesel_err(err),
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn resolve_talk_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::talks::dsl;
    dsl::talks
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn resolve_event_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::events::dsl;
    dsl::events
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn resolve_org_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::organizations::dsl;
    dsl::organizations
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn resolve_proposal_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::proposals::dsl;
    dsl::proposals
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn load_user_id(conn: &mut SqliteConnection, user_rowid: i64) -> Result<Id> {
    use schema::users::dsl;
    let id = schema::users::table
        .select(dsl::id)
        .filter(dsl::rowid.eq(&user_rowid))
        .first::<String>(conn)
        .map_err(from_diesel_err)?;
    Ok(id.into())
}
