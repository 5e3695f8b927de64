use super::*;

fn new_talk_from_json(new_talk: json::NewTalk) -> usecases::NewTalk {
    let json::NewTalk {
        title,
        description,
        level,
        language,
        references,
    } = new_talk;
    usecases::NewTalk {
        title,
        description,
        level,
        language,
        references,
    }
}

#[post("/talks", format = "application/json", data = "<t>")]
pub fn post_talk(
    db: sqlite::Connections,
    account: Account,
    t: JsonResult<json::NewTalk>,
) -> Result<json::Talk> {
    let new_talk = new_talk_from_json(t?.into_inner());
    let talk = flows::create_talk(&db, account.uid(), new_talk)?;
    Ok(Json(talk.into()))
}

#[put("/talks/<id>", format = "application/json", data = "<t>")]
pub fn put_talk(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    t: JsonResult<json::NewTalk>,
) -> Result<json::Talk> {
    let new_talk = new_talk_from_json(t?.into_inner());
    let talk = flows::update_talk(&db, account.uid(), id, new_talk)?;
    Ok(Json(talk.into()))
}

#[get("/talks/<id>")]
pub fn get_talk(db: sqlite::Connections, account: Account, id: &str) -> Result<json::Talk> {
    let talk = usecases::get_own_talk(&db.shared()?, account.uid(), id)?;
    Ok(Json(talk.into()))
}

#[get("/talks")]
pub fn get_talks(db: sqlite::Connections, account: Account) -> Result<Vec<json::Talk>> {
    let talks = usecases::get_own_talks(&db.shared()?, account.uid())?;
    Ok(Json(talks.into_iter().map(Into::into).collect()))
}
