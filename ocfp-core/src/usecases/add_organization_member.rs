use std::str::FromStr;

use super::{authorize::resolve_user, prelude::*};
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct NewMember {
    pub user_id: String,
    pub role: String,
}

/// Grants a user delegated event-management rights in an organization.
///
/// Only organizer-role members may manage the member list.
pub fn add_organization_member<R>(
    repo: &R,
    uid: &str,
    org_id: &str,
    new_member: NewMember,
) -> Result<()>
where
    R: UserRepo + OrganizationRepo,
{
    let caller = resolve_user(repo, uid)?;
    let org = repo.get_org(org_id).map_err(|err| match err {
        RepoError::NotFound => Error::OrganizationNotFound,
        err => Error::Repo(err),
    })?;
    let membership = repo
        .get_org_member(org.id.as_str(), caller.id.as_str())?
        .ok_or(Error::Forbidden)?;
    if !membership.may_manage() {
        return Err(Error::Forbidden);
    }
    let NewMember { user_id, role } = new_member;
    let role = MemberRole::from_str(&role).map_err(|_| Error::MemberRole)?;
    let user = repo.get_user(&user_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserNotFound,
        err => Error::Repo(err),
    })?;
    Ok(repo.add_org_member(&OrganizationMember {
        organization_id: org.id,
        user_id: user.id,
        role,
    })?)
}

#[cfg(test)]
mod tests {

    use super::{super::tests::MockDb, *};
    use ocfp_entities::builders::Builder;

    fn fixture() -> (MockDb, User, User) {
        let db = MockDb::default();
        let organizer = User::build().uid("organizer").name("Olga").finish();
        let newcomer = User::build().uid("newcomer").name("Nina").finish();
        db.create_user(&organizer).unwrap();
        db.create_user(&newcomer).unwrap();
        db.create_org(Organization {
            id: "org".into(),
            name: "Rust e.V.".into(),
        })
        .unwrap();
        db.add_org_member(&OrganizationMember {
            organization_id: "org".into(),
            user_id: organizer.id.clone(),
            role: MemberRole::Organizer,
        })
        .unwrap();
        (db, organizer, newcomer)
    }

    #[test]
    fn add_a_reviewer() {
        let (db, _, newcomer) = fixture();
        add_organization_member(
            &db,
            "organizer",
            "org",
            NewMember {
                user_id: newcomer.id.to_string(),
                role: "reviewer".into(),
            },
        )
        .unwrap();
        let member = db
            .get_org_member("org", newcomer.id.as_str())
            .unwrap()
            .unwrap();
        assert_eq!(member.role, MemberRole::Reviewer);
    }

    #[test]
    fn reviewer_must_not_add_members() {
        let (db, _, newcomer) = fixture();
        let reviewer = User::build().uid("reviewer").name("Rita").finish();
        db.create_user(&reviewer).unwrap();
        db.add_org_member(&OrganizationMember {
            organization_id: "org".into(),
            user_id: reviewer.id.clone(),
            role: MemberRole::Reviewer,
        })
        .unwrap();
        let result = add_organization_member(
            &db,
            "reviewer",
            "org",
            NewMember {
                user_id: newcomer.id.to_string(),
                role: "organizer".into(),
            },
        );
        assert!(matches!(result, Err(Error::Forbidden)));
    }

    #[test]
    fn reject_unknown_role() {
        let (db, _, newcomer) = fixture();
        let result = add_organization_member(
            &db,
            "organizer",
            "org",
            NewMember {
                user_id: newcomer.id.to_string(),
                role: "janitor".into(),
            },
        );
        assert!(matches!(result, Err(Error::MemberRole)));
    }
}
