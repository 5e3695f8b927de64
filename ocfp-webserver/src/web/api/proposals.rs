use super::*;

#[get("/events/<event_id>/proposals")]
pub fn get_proposals(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
) -> Result<Vec<json::Proposal>> {
    let proposals = usecases::get_proposals_of_event(&db.shared()?, account.uid(), event_id)?;
    Ok(Json(proposals.into_iter().map(Into::into).collect()))
}

#[get("/events/<event_id>/proposals/<proposal_id>")]
pub fn get_proposal(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    proposal_id: &str,
) -> Result<json::ProposalDetails> {
    let (proposal, messages, rating) =
        usecases::get_proposal(&db.shared()?, account.uid(), event_id, proposal_id)?;
    Ok(Json(json::ProposalDetails {
        proposal: proposal.into(),
        messages: messages.into_iter().map(Into::into).collect(),
        rating: rating.map(Into::into),
    }))
}

#[patch(
    "/events/<event_id>/proposals/<proposal_id>",
    format = "application/json",
    data = "<change>"
)]
pub fn patch_proposal(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    proposal_id: &str,
    change: JsonResult<json::ChangeProposalStatus>,
) -> StatusResult {
    let json::ChangeProposalStatus { status } = change?.into_inner();
    flows::change_proposal_status(&db, account.uid(), event_id, proposal_id, &status)?;
    Ok(Status::NoContent)
}
