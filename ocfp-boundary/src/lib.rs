//! # ocfp-boundary
//!
//! Serializable, anemic data structures for accessing the OpenCfP API in a
//! type-safe manner.
//!
//! These types define the wire-visible shape of the API. Internal record
//! fields (row ids, foreign keys beyond public ids, identity uids of other
//! users) are deliberately absent.

use serde::{Deserialize, Serialize};

mod conv;

/// Response of the API in case of an error
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Talk {
    pub id          : String,
    pub title       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references  : Option<String>,
    pub speakers    : Vec<String>,
    pub created_at  : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewTalk {
    pub title       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references  : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EventFormat {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EventCategory {
    pub id: String,
    pub name: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Event {
    pub id                  : String,
    pub title               : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description         : Option<String>,
    pub kind                : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfp_start           : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfp_end             : Option<i64>,
    pub cfp_open            : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_proposals       : Option<u32>,
    pub formats_required    : bool,
    pub categories_required : bool,
    pub formats             : Vec<EventFormat>,
    pub categories          : Vec<EventCategory>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewEvent {
    pub title               : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description         : Option<String>,
    pub kind                : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfp_start           : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfp_end             : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_proposals       : Option<u32>,
    #[serde(default)]
    pub formats_required    : bool,
    #[serde(default)]
    pub categories_required : bool,
    #[serde(default)]
    pub formats             : Vec<String>,
    #[serde(default)]
    pub categories          : Vec<String>,
}

/// Body of a talk submission.
///
/// Absent (or empty) format/category lists leave the corresponding
/// associations of an existing proposal untouched.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SubmitTalk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Proposal {
    pub id          : String,
    pub talk_id     : String,
    pub title       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments    : Option<String>,
    pub status      : String,
    pub speakers    : Vec<String>,
    pub formats     : Vec<String>,
    pub categories  : Vec<String>,
    pub created_at  : i64,
    pub updated_at  : i64,
}

/// Single-proposal view for organizers: the snapshot plus its conversation
/// and the caller's own rating.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ProposalDetails {
    pub proposal: Proposal,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ChangeProposalStatus {
    pub status: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Rating {
    pub rating: i8,
    pub feeling: String,
}

/// Body of a rating submission. Both fields absent means "no opinion" and
/// deletes the stored rating.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewRating {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeling: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Message {
    pub id         : String,
    pub author     : String,
    pub channel    : String,
    pub text       : String,
    pub created_at : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewMessage {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Organization {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewOrganization {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewOrganizationMember {
    pub user_id: String,
    pub role: String,
}
