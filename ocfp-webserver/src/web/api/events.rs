use super::*;

#[post("/events", format = "application/json", data = "<ev>")]
pub fn post_event(
    db: sqlite::Connections,
    account: Account,
    ev: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    let json::NewEvent {
        title,
        description,
        kind,
        organization,
        cfp_start,
        cfp_end,
        max_proposals,
        formats_required,
        categories_required,
        formats,
        categories,
    } = ev?.into_inner();
    let new_event = usecases::NewEvent {
        title,
        description,
        kind,
        organization,
        cfp_start,
        cfp_end,
        max_proposals,
        formats_required,
        categories_required,
        formats,
        categories,
    };
    let event = flows::create_event(&db, account.uid(), new_event)?;
    Ok(Json(json::Event::from_event_with_now(
        event,
        Timestamp::now(),
    )))
}

#[get("/events/<id>")]
pub fn get_event(db: sqlite::Connections, id: &str) -> Result<json::Event> {
    let event = usecases::get_event(&db.shared()?, id)?;
    Ok(Json(json::Event::from_event_with_now(
        event,
        Timestamp::now(),
    )))
}

#[get("/events")]
pub fn get_events(db: sqlite::Connections) -> Result<Vec<json::Event>> {
    let events = usecases::all_events(&db.shared()?)?;
    let now = Timestamp::now();
    Ok(Json(
        events
            .into_iter()
            .map(|event| json::Event::from_event_with_now(event, now))
            .collect(),
    ))
}
