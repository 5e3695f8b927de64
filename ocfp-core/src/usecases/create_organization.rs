use super::{authorize::resolve_user, prelude::*};

#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
}

/// Creates an organization with the caller as its first organizer.
pub fn create_organization<R>(
    repo: &R,
    uid: &str,
    new_org: NewOrganization,
) -> Result<Organization>
where
    R: UserRepo + OrganizationRepo,
{
    let user = resolve_user(repo, uid)?;
    let name = new_org.name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let org = Organization {
        id: Id::new(),
        name,
    };
    log::debug!("Storing newly created organization: {:?}", org);
    repo.create_org(org.clone())?;
    repo.add_org_member(&OrganizationMember {
        organization_id: org.id.clone(),
        user_id: user.id,
        role: MemberRole::Organizer,
    })?;
    Ok(org)
}
