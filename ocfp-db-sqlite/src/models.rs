#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub uid: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub uid: String,
    pub name: String,
    pub email: String,
}

#[derive(Insertable)]
#[diesel(table_name = talks)]
pub struct NewTalk<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub level: Option<i16>,
    pub language: Option<&'a str>,
    pub references: Option<&'a str>,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = talks, treat_none_as_null = true)]
pub struct ChangedTalk<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub level: Option<i16>,
    pub language: Option<&'a str>,
    pub references: Option<&'a str>,
}

#[derive(Queryable)]
pub struct TalkEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub level: Option<i16>,
    pub language: Option<String>,
    pub references: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = talk_speakers)]
pub struct NewTalkSpeaker {
    pub talk_rowid: i64,
    pub user_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganization<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct OrganizationEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = organization_members)]
pub struct NewOrganizationMember {
    pub org_rowid: i64,
    pub user_rowid: i64,
    pub role: i16,
}

#[derive(Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub kind: i16,
    pub owner_rowid: i64,
    pub org_rowid: Option<i64>,
    pub cfp_start: Option<i64>,
    pub cfp_end: Option<i64>,
    pub max_proposals: Option<i32>,
    pub formats_required: bool,
    pub categories_required: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: i16,
    pub owner_rowid: i64,
    pub org_rowid: Option<i64>,
    pub cfp_start: Option<i64>,
    pub cfp_end: Option<i64>,
    pub max_proposals: Option<i32>,
    pub formats_required: bool,
    pub categories_required: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_formats)]
pub struct NewEventFormat<'a> {
    pub event_rowid: i64,
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct EventFormatEntity {
    pub rowid: i64,
    pub event_rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = event_categories)]
pub struct NewEventCategory<'a> {
    pub event_rowid: i64,
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct EventCategoryEntity {
    pub rowid: i64,
    pub event_rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = proposals)]
pub struct NewProposal<'a> {
    pub id: &'a str,
    pub talk_rowid: i64,
    pub event_rowid: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub level: Option<i16>,
    pub language: Option<&'a str>,
    pub references: Option<&'a str>,
    pub comments: Option<&'a str>,
    pub status: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = proposals, treat_none_as_null = true)]
pub struct ChangedProposal<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub level: Option<i16>,
    pub language: Option<&'a str>,
    pub references: Option<&'a str>,
    pub comments: Option<&'a str>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct ProposalEntity {
    pub rowid: i64,
    pub id: String,
    pub talk_rowid: i64,
    pub event_rowid: i64,
    pub title: String,
    pub description: Option<String>,
    pub level: Option<i16>,
    pub language: Option<String>,
    pub references: Option<String>,
    pub comments: Option<String>,
    pub status: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = proposal_speakers)]
pub struct NewProposalSpeaker {
    pub proposal_rowid: i64,
    pub user_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = proposal_formats)]
pub struct NewProposalFormat<'a> {
    pub proposal_rowid: i64,
    pub format_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = proposal_categories)]
pub struct NewProposalCategory<'a> {
    pub proposal_rowid: i64,
    pub category_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub user_rowid: i64,
    pub proposal_rowid: i64,
    pub value: i16,
    pub feeling: i16,
}

#[derive(Queryable)]
pub struct RatingEntity {
    pub user_rowid: i64,
    pub proposal_rowid: i64,
    pub value: i16,
    pub feeling: i16,
}

#[derive(Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessage<'a> {
    pub id: &'a str,
    pub proposal_rowid: i64,
    pub author_rowid: i64,
    pub channel: i16,
    pub text: &'a str,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Queryable)]
pub struct MessageEntity {
    pub rowid: i64,
    pub id: String,
    pub proposal_rowid: i64,
    pub author_rowid: i64,
    pub channel: i16,
    pub text: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}
