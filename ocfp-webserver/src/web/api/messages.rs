use super::*;

#[post(
    "/events/<event_id>/proposals/<proposal_id>/messages",
    format = "application/json",
    data = "<message>"
)]
pub fn post_message(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    proposal_id: &str,
    message: JsonResult<json::NewMessage>,
) -> Result<String> {
    let json::NewMessage { text } = message?.into_inner();
    // The channel is fixed by the endpoint: this is the organizer-side
    // conversation.
    let message_id = flows::post_message(
        &db,
        account.uid(),
        event_id,
        proposal_id,
        MessageChannel::Organizer,
        usecases::NewMessage { text },
    )?;
    Ok(Json(message_id.to_string()))
}

#[patch(
    "/events/<event_id>/proposals/<proposal_id>/messages/<message_id>",
    format = "application/json",
    data = "<message>"
)]
pub fn patch_message(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    proposal_id: &str,
    message_id: &str,
    message: JsonResult<json::NewMessage>,
) -> StatusResult {
    let json::NewMessage { text } = message?.into_inner();
    flows::edit_message(
        &db,
        account.uid(),
        event_id,
        proposal_id,
        message_id,
        usecases::NewMessage { text },
    )?;
    Ok(Status::NoContent)
}

#[delete("/events/<event_id>/proposals/<proposal_id>/messages/<message_id>")]
pub fn delete_message(
    db: sqlite::Connections,
    account: Account,
    event_id: &str,
    proposal_id: &str,
    message_id: &str,
) -> StatusResult {
    flows::delete_message(&db, account.uid(), event_id, proposal_id, message_id)?;
    Ok(Status::NoContent)
}
