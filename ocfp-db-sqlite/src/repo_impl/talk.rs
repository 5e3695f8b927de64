use super::*;

impl TalkRepo for DbReadOnly<'_> {
    fn create_talk(&self, _talk: Talk) -> Result<()> {
        unreachable!();
    }
    fn update_talk(&self, _talk: &Talk) -> Result<()> {
        unreachable!();
    }

    fn get_talk(&self, id: &str) -> Result<Talk> {
        get_talk(&mut self.conn.borrow_mut(), id)
    }
    fn talks_of_speaker(&self, user_id: &str) -> Result<Vec<Talk>> {
        talks_of_speaker(&mut self.conn.borrow_mut(), user_id)
    }
}

impl TalkRepo for DbReadWrite<'_> {
    fn create_talk(&self, talk: Talk) -> Result<()> {
        create_talk(&mut self.conn.borrow_mut(), talk)
    }
    fn update_talk(&self, talk: &Talk) -> Result<()> {
        update_talk(&mut self.conn.borrow_mut(), talk)
    }

    fn get_talk(&self, id: &str) -> Result<Talk> {
        get_talk(&mut self.conn.borrow_mut(), id)
    }
    fn talks_of_speaker(&self, user_id: &str) -> Result<Vec<Talk>> {
        talks_of_speaker(&mut self.conn.borrow_mut(), user_id)
    }
}

impl TalkRepo for DbConnection<'_> {
    fn create_talk(&self, talk: Talk) -> Result<()> {
        create_talk(&mut self.conn.borrow_mut(), talk)
    }
    fn update_talk(&self, talk: &Talk) -> Result<()> {
        update_talk(&mut self.conn.borrow_mut(), talk)
    }

    fn get_talk(&self, id: &str) -> Result<Talk> {
        get_talk(&mut self.conn.borrow_mut(), id)
    }
    fn talks_of_speaker(&self, user_id: &str) -> Result<Vec<Talk>> {
        talks_of_speaker(&mut self.conn.borrow_mut(), user_id)
    }
}

fn load_talk_speakers(conn: &mut SqliteConnection, talk_rowid: i64) -> Result<Vec<Id>> {
    use schema::{talk_speakers, users};
    Ok(talk_speakers::table
        .inner_join(users::table)
        .select(users::id)
        .filter(talk_speakers::talk_rowid.eq(&talk_rowid))
        .order_by(users::rowid)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn replace_talk_speakers(
    conn: &mut SqliteConnection,
    talk_rowid: i64,
    speakers: &[Id],
) -> Result<()> {
    use schema::talk_speakers::dsl;
    diesel::delete(dsl::talk_speakers.filter(dsl::talk_rowid.eq(talk_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    for speaker in speakers {
        let user_rowid = resolve_user_rowid(conn, speaker.as_str())?;
        diesel::insert_or_ignore_into(dsl::talk_speakers)
            .values(&models::NewTalkSpeaker {
                talk_rowid,
                user_rowid,
            })
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn talk_from_entity(conn: &mut SqliteConnection, entity: models::TalkEntity) -> Result<Talk> {
    let models::TalkEntity {
        rowid,
        id,
        title,
        description,
        level,
        language,
        references,
        created_at,
    } = entity;
    let speakers = load_talk_speakers(conn, rowid)?;
    let level = level.map(util::talk_level_from_i16).transpose()?;
    Ok(Talk {
        id: id.into(),
        title,
        description,
        level,
        language,
        references,
        speakers,
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_talk(conn: &mut SqliteConnection, talk: Talk) -> Result<()> {
    let new_talk = models::NewTalk {
        id: talk.id.as_ref(),
        title: &talk.title,
        description: talk.description.as_deref(),
        level: talk.level.map(|level| level as i16),
        language: talk.language.as_deref(),
        references: talk.references.as_deref(),
        created_at: talk.created_at.as_secs(),
    };
    conn.transaction::<_, TransactionError, _>(|conn| {
        diesel::insert_into(schema::talks::table)
            .values(&new_talk)
            .execute(conn)
            .map_err(from_diesel_err)?;
        let rowid = resolve_talk_rowid(conn, new_talk.id)?;
        replace_talk_speakers(conn, rowid, &talk.speakers)?;
        Ok(())
    })
    .map_err(commit_err)?;
    Ok(())
}

fn update_talk(conn: &mut SqliteConnection, talk: &Talk) -> Result<()> {
    let rowid = resolve_talk_rowid(conn, talk.id.as_ref())?;
    let changed = models::ChangedTalk {
        title: &talk.title,
        description: talk.description.as_deref(),
        level: talk.level.map(|level| level as i16),
        language: talk.language.as_deref(),
        references: talk.references.as_deref(),
    };
    conn.transaction::<_, TransactionError, _>(|conn| {
        use schema::talks::dsl;
        diesel::update(dsl::talks.filter(dsl::rowid.eq(&rowid)))
            .set(&changed)
            .execute(conn)
            .map_err(from_diesel_err)?;
        replace_talk_speakers(conn, rowid, &talk.speakers)?;
        Ok(())
    })
    .map_err(commit_err)?;
    Ok(())
}

fn get_talk(conn: &mut SqliteConnection, id: &str) -> Result<Talk> {
    use schema::talks::dsl;
    let entity = dsl::talks
        .filter(dsl::id.eq(id))
        .first::<models::TalkEntity>(conn)
        .map_err(from_diesel_err)?;
    talk_from_entity(conn, entity)
}

fn talks_of_speaker(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Talk>> {
    use schema::{talk_speakers, talks};
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let entities = talks::table
        .filter(
            talks::rowid.eq_any(
                talk_speakers::table
                    .select(talk_speakers::talk_rowid)
                    .filter(talk_speakers::user_rowid.eq(&user_rowid)),
            ),
        )
        .order_by(talks::created_at)
        .load::<models::TalkEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut talks = Vec::with_capacity(entities.len());
    for entity in entities {
        talks.push(talk_from_entity(conn, entity)?);
    }
    Ok(talks)
}
