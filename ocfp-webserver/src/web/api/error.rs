use super::json_error_response;
use anyhow::anyhow;
use ocfp_application::error::{AppError, BError};
pub use ocfp_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::large_enum_variant)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden
        | ParameterError::CfpClosed
        | ParameterError::MaxProposalsReached => Status::Forbidden,
        ParameterError::UserNotFound
        | ParameterError::EventNotFound
        | ParameterError::TalkNotFound
        | ParameterError::ProposalNotFound
        | ParameterError::MessageNotFound
        | ParameterError::OrganizationNotFound => Status::NotFound,
        ParameterError::UserExists => Status::Conflict,
        ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
        // Losing a unique-key race surfaces as a conflict instead of a
        // raw storage error.
        ParameterError::Repo(RepoError::AlreadyExists) => Status::Conflict,
        ParameterError::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            let status = parameter_error_status(err);
                            if status == Status::InternalServerError {
                                error!("Error: {err}");
                                return Err(status);
                            }
                            return json_error_response(req, err, status);
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        BError::Repo(RepoError::AlreadyExists) => {
                            return json_error_response(req, err, Status::Conflict);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ocfp_core::usecases::Error> for Error {
    fn from(err: ocfp_core::usecases::Error) -> Self {
        Self::App(err.into())
    }
}

impl From<ocfp_entities::email::EmailAddressParseError> for Error {
    fn from(err: ocfp_entities::email::EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}
