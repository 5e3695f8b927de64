use std::{fmt::Display, result};

use ocfp_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    patch, post, put,
    response::{self, Responder},
    routes, Route,
};

use super::{guards::*, sqlite};
use ocfp_application::prelude as flows;
use ocfp_boundary as json;
use ocfp_core::{entities::*, usecases};

mod error;
mod events;
mod messages;
mod organizations;
mod proposals;
mod ratings;
mod submissions;
mod talks;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::get_current_user,
        // ---   talks   --- //
        talks::post_talk,
        talks::put_talk,
        talks::get_talk,
        talks::get_talks,
        // ---   events   --- //
        events::post_event,
        events::get_event,
        events::get_events,
        // ---   organizations   --- //
        organizations::post_organization,
        organizations::post_organization_member,
        // ---   submissions   --- //
        submissions::put_submission,
        submissions::delete_submission,
        // ---   proposals   --- //
        proposals::get_proposals,
        proposals::get_proposal,
        proposals::patch_proposal,
        // ---   ratings   --- //
        ratings::put_rating,
        // ---   messages   --- //
        messages::post_message,
        messages::patch_message,
        messages::delete_message,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
