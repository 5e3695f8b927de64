use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Registers the authenticated identity as a platform user.
///
/// Users are created exactly once; the identity resolver never creates
/// records implicitly.
pub fn register_user<R: UserRepo>(repo: &R, uid: &str, new_user: NewUser) -> Result<User> {
    let NewUser { name, email } = new_user;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let email = email.parse::<EmailAddress>()?;
    if repo.try_get_user_by_uid(uid)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        uid: uid.to_owned(),
        name,
        email,
    };
    log::debug!("Creating new user: uid = {}", user.uid);
    repo.create_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {

    use super::{super::tests::MockDb, *};

    #[test]
    fn register_two_users() {
        let db = MockDb::default();
        for (uid, name) in [("uid-1", "Alice"), ("uid-2", "Bob")] {
            let user = register_user(
                &db,
                uid,
                NewUser {
                    name: name.into(),
                    email: format!("{name}@example.com"),
                },
            )
            .unwrap();
            assert!(user.id.is_valid());
        }
        assert_eq!(db.count_users().unwrap(), 2);
        assert!(db.try_get_user_by_uid("uid-1").unwrap().is_some());
        assert!(db.try_get_user_by_uid("uid-3").unwrap().is_none());
    }

    #[test]
    fn register_with_invalid_email() {
        let db = MockDb::default();
        let result = register_user(
            &db,
            "uid-1",
            NewUser {
                name: "Alice".into(),
                email: "not an address".into(),
            },
        );
        assert!(matches!(result, Err(Error::EmailAddress)));
    }

    #[test]
    fn register_with_empty_name() {
        let db = MockDb::default();
        let result = register_user(
            &db,
            "uid-1",
            NewUser {
                name: "  ".into(),
                email: "alice@example.com".into(),
            },
        );
        assert!(matches!(result, Err(Error::Name)));
    }

    #[test]
    fn register_the_same_uid_twice() {
        let db = MockDb::default();
        let new_user = NewUser {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        assert!(register_user(&db, "uid-1", new_user.clone()).is_ok());
        match register_user(&db, "uid-1", new_user).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }
}
