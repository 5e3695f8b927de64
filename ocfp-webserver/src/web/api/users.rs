use super::*;

#[post("/users", format = "application/json", data = "<u>")]
pub fn post_user(
    db: sqlite::Connections,
    account: Account,
    u: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let json::NewUser { name, email } = u?.into_inner();
    let user = flows::create_user(&db, account.uid(), usecases::NewUser { name, email })?;
    Ok(Json(user.into()))
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_current_user(&db.shared()?, account.uid())?;
    Ok(Json(user.into()))
}
