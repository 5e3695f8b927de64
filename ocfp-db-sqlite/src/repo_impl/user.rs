use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_uid(&self, uid: &str) -> Result<User> {
        get_user_by_uid(&mut self.conn.borrow_mut(), uid)
    }
    fn try_get_user_by_uid(&self, uid: &str) -> Result<Option<User>> {
        try_get_user_by_uid(&mut self.conn.borrow_mut(), uid)
    }
}

impl UserRepo for DbReadWrite<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_uid(&self, uid: &str) -> Result<User> {
        get_user_by_uid(&mut self.conn.borrow_mut(), uid)
    }
    fn try_get_user_by_uid(&self, uid: &str) -> Result<Option<User>> {
        try_get_user_by_uid(&mut self.conn.borrow_mut(), uid)
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_uid(&self, uid: &str) -> Result<User> {
        get_user_by_uid(&mut self.conn.borrow_mut(), uid)
    }
    fn try_get_user_by_uid(&self, uid: &str) -> Result<Option<User>> {
        try_get_user_by_uid(&mut self.conn.borrow_mut(), uid)
    }
}

fn user_from_entity(entity: models::UserEntity) -> User {
    let models::UserEntity {
        id,
        uid,
        name,
        email,
        ..
    } = entity;
    User {
        id: id.into(),
        uid,
        name,
        email: EmailAddress::new_unchecked(email),
    }
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: user.id.as_ref(),
        uid: &user.uid,
        name: &user.name,
        email: user.email.as_str(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    Ok(schema::users::table
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(user_from_entity)
        .collect())
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(user_from_entity(entity))
}

fn get_user_by_uid(conn: &mut SqliteConnection, uid: &str) -> Result<User> {
    try_get_user_by_uid(conn, uid)?.ok_or(repo::Error::NotFound)
}

fn try_get_user_by_uid(conn: &mut SqliteConnection, uid: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::uid.eq(uid))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    Ok(entity.map(user_from_entity))
}
