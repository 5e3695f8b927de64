use super::{
    authorize::{get_event, get_proposal_of_event, get_talk, resolve_user},
    prelude::*,
};

#[derive(Debug, Clone, Default)]
pub struct SubmitTalk {
    pub comments: Option<String>,
    pub formats: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
}

/// Submits a talk to an event, or resubmits it.
///
/// At most one proposal exists per (talk, event) pair. A second submission
/// of the same talk overwrites the existing proposal's snapshot instead of
/// creating a new one, so resubmission is the only way to update a proposal.
pub fn submit_talk<R>(
    repo: &R,
    uid: &str,
    talk_id: &str,
    event_id: &str,
    submission: SubmitTalk,
) -> Result<Id>
where
    R: UserRepo + TalkRepo + EventRepo + ProposalRepo,
{
    let user = resolve_user(repo, uid)?;
    let talk = get_talk(repo, talk_id)?;
    if !talk.has_speaker(&user.id) {
        return Err(Error::Forbidden);
    }
    let event = get_event(repo, event_id)?;
    // The window depends on the wall clock and must be re-evaluated on
    // every request.
    if !event.is_cfp_open(Timestamp::now()) {
        return Err(Error::CfpClosed);
    }
    let SubmitTalk {
        comments,
        formats,
        categories,
    } = submission;
    if event.formats_required && formats.as_deref().map_or(true, <[String]>::is_empty) {
        return Err(Error::FormatsRequired);
    }
    if event.categories_required && categories.as_deref().map_or(true, <[String]>::is_empty) {
        return Err(Error::CategoriesRequired);
    }
    let formats: Option<Vec<Id>> = formats
        // An empty list skips the update instead of clearing the
        // associations, mirroring the submission form behavior.
        .filter(|ids| !ids.is_empty())
        .map(|ids| ids.into_iter().map(Id::from).collect());
    let categories: Option<Vec<Id>> = categories
        .filter(|ids| !ids.is_empty())
        .map(|ids| ids.into_iter().map(Id::from).collect());

    let now = Timestamp::now();
    if let Some(mut proposal) = repo.get_proposal_of_talk(talk_id, event_id)? {
        // Resubmission: refresh the snapshot wholesale.
        let Talk {
            title,
            description,
            level,
            language,
            references,
            speakers,
            ..
        } = talk;
        proposal.title = title;
        proposal.description = description;
        proposal.level = level;
        proposal.language = language;
        proposal.references = references;
        proposal.speakers = speakers;
        proposal.comments = comments;
        if let Some(formats) = formats {
            proposal.formats = formats;
        }
        if let Some(categories) = categories {
            proposal.categories = categories;
        }
        proposal.updated_at = now;
        log::debug!(
            "Updating proposal {} of talk {} for event {}",
            proposal.id,
            talk_id,
            event_id
        );
        repo.update_proposal(&proposal)?;
        Ok(proposal.id)
    } else {
        if let Some(max_proposals) = event.max_proposals {
            let submitted = repo
                .proposals_of_speaker(event_id, user.id.as_str())?
                .len();
            if submitted >= max_proposals as usize {
                return Err(Error::MaxProposalsReached);
            }
        }
        let Talk {
            id: talk_id,
            title,
            description,
            level,
            language,
            references,
            speakers,
            ..
        } = talk;
        let proposal = Proposal {
            id: Id::new(),
            talk_id,
            event_id: event.id,
            title,
            description,
            level,
            language,
            references,
            comments,
            status: ProposalStatus::Submitted,
            speakers,
            formats: formats.unwrap_or_default(),
            categories: categories.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        log::debug!("Storing new proposal: {:?}", proposal);
        let id = proposal.id.clone();
        repo.create_proposal(proposal)?;
        Ok(id)
    }
}

/// Withdraws a previously submitted talk from an event.
///
/// The proposal is deleted outright together with its associations.
pub fn unsubmit_talk<R>(repo: &R, uid: &str, talk_id: &str, event_id: &str) -> Result<()>
where
    R: UserRepo + TalkRepo + EventRepo + ProposalRepo,
{
    let user = resolve_user(repo, uid)?;
    let talk = get_talk(repo, talk_id)?;
    if !talk.has_speaker(&user.id) {
        return Err(Error::Forbidden);
    }
    let event = get_event(repo, event_id)?;
    if !event.is_cfp_open(Timestamp::now()) {
        return Err(Error::CfpClosed);
    }
    let proposal = repo
        .get_proposal_of_talk(talk_id, event_id)?
        .ok_or(Error::ProposalNotFound)?;
    log::debug!(
        "Deleting proposal {} of talk {} for event {}",
        proposal.id,
        talk_id,
        event_id
    );
    Ok(repo.delete_proposal(proposal.id.as_str())?)
}

/// Loads a proposal for an organizer together with its conversation and the
/// caller's own rating.
pub fn get_proposal<R>(
    repo: &R,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
) -> Result<(Proposal, Vec<Message>, Option<Rating>)>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo + MessageRepo + RatingRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    super::authorize_event_access(repo, &user, &event, super::Capability::Read)?;
    let proposal = get_proposal_of_event(repo, &event, proposal_id)?;
    let messages = repo.messages_of_proposal(proposal.id.as_str())?;
    let rating = repo.get_rating(user.id.as_str(), proposal.id.as_str())?;
    Ok((proposal, messages, rating))
}

pub fn get_proposals_of_event<R>(repo: &R, uid: &str, event_id: &str) -> Result<Vec<Proposal>>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    super::authorize_event_access(repo, &user, &event, super::Capability::Read)?;
    Ok(repo.proposals_of_event(event.id.as_str())?)
}
