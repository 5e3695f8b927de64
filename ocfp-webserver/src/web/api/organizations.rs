use super::*;

#[post("/organizations", format = "application/json", data = "<org>")]
pub fn post_organization(
    db: sqlite::Connections,
    account: Account,
    org: JsonResult<json::NewOrganization>,
) -> Result<json::Organization> {
    let json::NewOrganization { name } = org?.into_inner();
    let org = flows::create_organization(&db, account.uid(), usecases::NewOrganization { name })?;
    Ok(Json(org.into()))
}

#[post(
    "/organizations/<id>/members",
    format = "application/json",
    data = "<member>"
)]
pub fn post_organization_member(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    member: JsonResult<json::NewOrganizationMember>,
) -> StatusResult {
    let json::NewOrganizationMember { user_id, role } = member?.into_inner();
    flows::add_organization_member(
        &db,
        account.uid(),
        id,
        usecases::NewMember { user_id, role },
    )?;
    Ok(Status::NoContent)
}
