use super::*;

impl RatingRepo for DbReadOnly<'_> {
    fn upsert_rating(&self, _rating: Rating) -> Result<()> {
        unreachable!();
    }
    fn delete_rating(&self, _user_id: &str, _proposal_id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_rating(&self, user_id: &str, proposal_id: &str) -> Result<Option<Rating>> {
        get_rating(&mut self.conn.borrow_mut(), user_id, proposal_id)
    }
    fn ratings_of_proposal(&self, proposal_id: &str) -> Result<Vec<Rating>> {
        ratings_of_proposal(&mut self.conn.borrow_mut(), proposal_id)
    }
}

impl RatingRepo for DbReadWrite<'_> {
    fn upsert_rating(&self, rating: Rating) -> Result<()> {
        upsert_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn delete_rating(&self, user_id: &str, proposal_id: &str) -> Result<()> {
        delete_rating(&mut self.conn.borrow_mut(), user_id, proposal_id)
    }

    fn get_rating(&self, user_id: &str, proposal_id: &str) -> Result<Option<Rating>> {
        get_rating(&mut self.conn.borrow_mut(), user_id, proposal_id)
    }
    fn ratings_of_proposal(&self, proposal_id: &str) -> Result<Vec<Rating>> {
        ratings_of_proposal(&mut self.conn.borrow_mut(), proposal_id)
    }
}

impl RatingRepo for DbConnection<'_> {
    fn upsert_rating(&self, rating: Rating) -> Result<()> {
        upsert_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn delete_rating(&self, user_id: &str, proposal_id: &str) -> Result<()> {
        delete_rating(&mut self.conn.borrow_mut(), user_id, proposal_id)
    }

    fn get_rating(&self, user_id: &str, proposal_id: &str) -> Result<Option<Rating>> {
        get_rating(&mut self.conn.borrow_mut(), user_id, proposal_id)
    }
    fn ratings_of_proposal(&self, proposal_id: &str) -> Result<Vec<Rating>> {
        ratings_of_proposal(&mut self.conn.borrow_mut(), proposal_id)
    }
}

fn upsert_rating(conn: &mut SqliteConnection, rating: Rating) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, rating.user_id.as_str())?;
    let proposal_rowid = resolve_proposal_rowid(conn, rating.proposal_id.as_str())?;
    let new_rating = models::NewRating {
        user_rowid,
        proposal_rowid,
        value: i8::from(rating.value) as i16,
        feeling: rating.feeling as i16,
    };
    // REPLACE keeps the unique (user, proposal) key intact.
    diesel::replace_into(schema::ratings::table)
        .values(&new_rating)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_rating(conn: &mut SqliteConnection, user_id: &str, proposal_id: &str) -> Result<()> {
    use schema::ratings::dsl;
    // "No opinion" is the absence of a row, so deleting nothing is fine.
    let user_rowid = match resolve_user_rowid(conn, user_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(()),
        Err(err) => return Err(err),
    };
    let proposal_rowid = match resolve_proposal_rowid(conn, proposal_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(()),
        Err(err) => return Err(err),
    };
    diesel::delete(
        dsl::ratings
            .filter(dsl::user_rowid.eq(user_rowid))
            .filter(dsl::proposal_rowid.eq(proposal_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(())
}

fn get_rating(
    conn: &mut SqliteConnection,
    user_id: &str,
    proposal_id: &str,
) -> Result<Option<Rating>> {
    use schema::{proposals, ratings, users};
    let row = ratings::table
        .inner_join(users::table)
        .inner_join(proposals::table)
        .select((ratings::value, ratings::feeling))
        .filter(users::id.eq(user_id))
        .filter(proposals::id.eq(proposal_id))
        .first::<(i16, i16)>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    row.map(|(value, feeling)| {
        Ok(Rating {
            proposal_id: proposal_id.into(),
            user_id: user_id.into(),
            value: RatingValue::from(value as i8),
            feeling: util::feeling_from_i16(feeling)?,
        })
    })
    .transpose()
}

fn ratings_of_proposal(conn: &mut SqliteConnection, proposal_id: &str) -> Result<Vec<Rating>> {
    use schema::{proposals, ratings, users};
    let rows = ratings::table
        .inner_join(users::table)
        .inner_join(proposals::table)
        .select((users::id, ratings::value, ratings::feeling))
        .filter(proposals::id.eq(proposal_id))
        .load::<(String, i16, i16)>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|(user_id, value, feeling)| {
            Ok(Rating {
                proposal_id: proposal_id.into(),
                user_id: user_id.into(),
                value: RatingValue::from(value as i8),
                feeling: util::feeling_from_i16(feeling)?,
            })
        })
        .collect()
}
