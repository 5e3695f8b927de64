use super::*;

#[put(
    "/events/<event_id>/submissions/<talk_id>",
    format = "application/json",
    data = "<s>"
)]
pub fn put_submission(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    talk_id: &str,
    s: JsonResult<json::SubmitTalk>,
) -> Result<String> {
    let json::SubmitTalk {
        comments,
        formats,
        categories,
    } = s?.into_inner();
    let submission = usecases::SubmitTalk {
        comments,
        formats,
        categories,
    };
    let proposal_id = flows::submit_talk(&db, account.uid(), talk_id, event_id, submission)?;
    Ok(Json(proposal_id.to_string()))
}

#[delete("/events/<event_id>/submissions/<talk_id>")]
pub fn delete_submission(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    talk_id: &str,
) -> StatusResult {
    flows::unsubmit_talk(&db, account.uid(), talk_id, event_id)?;
    Ok(Status::NoContent)
}
