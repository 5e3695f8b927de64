use super::{
    authorize::{get_event, get_proposal_of_event, resolve_user},
    authorize_event_access, Capability,
    prelude::*,
};
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub text: String,
}

pub fn post_message<R>(
    repo: &R,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    channel: MessageChannel,
    new_message: NewMessage,
) -> Result<Id>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo + MessageRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    authorize_event_access(repo, &user, &event, Capability::Read)?;
    let proposal = get_proposal_of_event(repo, &event, proposal_id)?;
    let text = new_message.text.trim().to_owned();
    if text.is_empty() {
        return Err(Error::EmptyMessage);
    }
    let message = Message {
        id: Id::new(),
        proposal_id: proposal.id,
        author: user.id,
        channel,
        text,
        created_at: Timestamp::now(),
        updated_at: None,
    };
    let id = message.id.clone();
    repo.create_message(message)?;
    Ok(id)
}

pub fn edit_message<R>(
    repo: &R,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    message_id: &str,
    new_message: NewMessage,
) -> Result<()>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo + MessageRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    authorize_event_access(repo, &user, &event, Capability::Read)?;
    let proposal = get_proposal_of_event(repo, &event, proposal_id)?;
    let text = new_message.text.trim().to_owned();
    if text.is_empty() {
        return Err(Error::EmptyMessage);
    }
    let mut message = get_own_message(repo, &user, &proposal, message_id)?;
    message.text = text;
    message.updated_at = Some(Timestamp::now());
    Ok(repo.update_message(&message)?)
}

pub fn delete_message<R>(
    repo: &R,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    message_id: &str,
) -> Result<()>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo + MessageRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    authorize_event_access(repo, &user, &event, Capability::Read)?;
    let proposal = get_proposal_of_event(repo, &event, proposal_id)?;
    let message = get_own_message(repo, &user, &proposal, message_id)?;
    Ok(repo.delete_message(message.id.as_str())?)
}

// Answers `MessageNotFound` for foreign messages on purpose: a plain 404
// does not reveal whether somebody else's message exists.
fn get_own_message<R: MessageRepo>(
    repo: &R,
    user: &User,
    proposal: &Proposal,
    message_id: &str,
) -> Result<Message> {
    let message = repo.get_message(message_id).map_err(|err| match err {
        RepoError::NotFound => Error::MessageNotFound,
        err => Error::Repo(err),
    })?;
    if message.proposal_id != proposal.id || message.author != user.id {
        return Err(Error::MessageNotFound);
    }
    Ok(message)
}
