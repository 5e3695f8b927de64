use super::*;

#[put(
    "/events/<event_id>/proposals/<proposal_id>/rating",
    format = "application/json",
    data = "<rating>"
)]
pub fn put_rating(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    proposal_id: &str,
    rating: JsonResult<json::NewRating>,
) -> StatusResult {
    let json::NewRating { rating, feeling } = rating?.into_inner();
    flows::rate_proposal(
        &db,
        account.uid(),
        event_id,
        proposal_id,
        usecases::NewRating { rating, feeling },
    )?;
    Ok(Status::NoContent)
}
