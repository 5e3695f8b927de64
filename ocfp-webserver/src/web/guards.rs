use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use ocfp_application::error::AppError;
use ocfp_core::usecases::Error as ParameterError;

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The verified external identity of the request, if any.
///
/// Token verification is delegated to the authentication proxy in front of
/// this service; the bearer token that arrives here is the opaque uid of
/// the authenticated identity.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
}

impl Auth {
    pub fn uid(&self) -> Result<&str> {
        self.bearer_tokens
            .first()
            .map(String::as_str)
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        Outcome::Success(Self { bearer_tokens })
    }
}

/// An authenticated request. Guarding on this answers 401 before any
/// request body is even parsed.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn uid(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.uid() {
            Ok(uid) => Outcome::Success(Account(uid.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
