use super::{
    authorize::{get_event, get_proposal_of_event, resolve_user},
    authorize_event_access, Capability,
    prelude::*,
};

#[derive(Debug, Clone, Default)]
pub struct NewRating {
    pub rating: Option<i8>,
    pub feeling: Option<String>,
}

/// Records one reviewer's opinion on one proposal.
///
/// "No opinion" is represented by the absence of a row: submitting a rating
/// with both fields missing deletes any previously stored row instead of
/// storing nulls.
pub fn rate_proposal<R>(
    repo: &R,
    uid: &str,
    event_id: &str,
    proposal_id: &str,
    new_rating: NewRating,
) -> Result<()>
where
    R: UserRepo + EventRepo + OrganizationRepo + ProposalRepo + RatingRepo,
{
    let user = resolve_user(repo, uid)?;
    let event = get_event(repo, event_id)?;
    authorize_event_access(repo, &user, &event, Capability::Read)?;
    let proposal = get_proposal_of_event(repo, &event, proposal_id)?;

    let NewRating { rating, feeling } = new_rating;
    match (rating, feeling) {
        (None, None) => Ok(repo.delete_rating(user.id.as_str(), proposal.id.as_str())?),
        (Some(value), Some(feeling)) => {
            let value = RatingValue::from(value);
            if !value.is_valid() {
                return Err(Error::RatingValue);
            }
            let feeling = feeling.parse::<Feeling>().map_err(|_| Error::Feeling)?;
            Ok(repo.upsert_rating(Rating {
                proposal_id: proposal.id,
                user_id: user.id,
                value,
                feeling,
            })?)
        }
        (Some(_), None) => Err(Error::Feeling),
        (None, Some(_)) => Err(Error::RatingValue),
    }
}
