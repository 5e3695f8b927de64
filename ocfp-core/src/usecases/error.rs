use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The user does not exist")]
    UserNotFound,
    #[error("The event does not exist")]
    EventNotFound,
    #[error("The talk does not exist")]
    TalkNotFound,
    #[error("The proposal does not exist")]
    ProposalNotFound,
    #[error("The message does not exist")]
    MessageNotFound,
    #[error("The organization does not exist")]
    OrganizationNotFound,
    #[error("The user already exists")]
    UserExists,
    #[error("The title is invalid")]
    Title,
    #[error("The name is invalid")]
    Name,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid talk level")]
    TalkLevel,
    #[error("Invalid event kind")]
    EventKind,
    #[error("Invalid member role")]
    MemberRole,
    #[error("Invalid proposal status")]
    ProposalStatus,
    #[error("The end of the CFP window is before the start")]
    CfpEndBeforeStart,
    #[error("CFP is closed")]
    CfpClosed,
    #[error("Formats are required")]
    FormatsRequired,
    #[error("Categories are required")]
    CategoriesRequired,
    #[error("Max proposals reached")]
    MaxProposalsReached,
    #[error("Empty message")]
    EmptyMessage,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid feeling")]
    Feeling,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ocfp_entities::email::EmailAddressParseError> for Error {
    fn from(_: ocfp_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
