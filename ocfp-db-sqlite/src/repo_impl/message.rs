use super::*;

impl MessageRepo for DbReadOnly<'_> {
    fn create_message(&self, _message: Message) -> Result<()> {
        unreachable!();
    }
    fn update_message(&self, _message: &Message) -> Result<()> {
        unreachable!();
    }
    fn delete_message(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_message(&self, id: &str) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn messages_of_proposal(&self, proposal_id: &str) -> Result<Vec<Message>> {
        messages_of_proposal(&mut self.conn.borrow_mut(), proposal_id)
    }
}

impl MessageRepo for DbReadWrite<'_> {
    fn create_message(&self, message: Message) -> Result<()> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn update_message(&self, message: &Message) -> Result<()> {
        update_message(&mut self.conn.borrow_mut(), message)
    }
    fn delete_message(&self, id: &str) -> Result<()> {
        delete_message(&mut self.conn.borrow_mut(), id)
    }

    fn get_message(&self, id: &str) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn messages_of_proposal(&self, proposal_id: &str) -> Result<Vec<Message>> {
        messages_of_proposal(&mut self.conn.borrow_mut(), proposal_id)
    }
}

impl MessageRepo for DbConnection<'_> {
    fn create_message(&self, message: Message) -> Result<()> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn update_message(&self, message: &Message) -> Result<()> {
        update_message(&mut self.conn.borrow_mut(), message)
    }
    fn delete_message(&self, id: &str) -> Result<()> {
        delete_message(&mut self.conn.borrow_mut(), id)
    }

    fn get_message(&self, id: &str) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn messages_of_proposal(&self, proposal_id: &str) -> Result<Vec<Message>> {
        messages_of_proposal(&mut self.conn.borrow_mut(), proposal_id)
    }
}

fn message_from_entity(
    conn: &mut SqliteConnection,
    entity: models::MessageEntity,
) -> Result<Message> {
    let models::MessageEntity {
        id,
        proposal_rowid,
        author_rowid,
        channel,
        text,
        created_at,
        updated_at,
        ..
    } = entity;
    let proposal_id = {
        use schema::proposals::dsl;
        dsl::proposals
            .select(dsl::id)
            .filter(dsl::rowid.eq(&proposal_rowid))
            .first::<String>(conn)
            .map_err(from_diesel_err)?
    };
    let author = load_user_id(conn, author_rowid)?;
    Ok(Message {
        id: id.into(),
        proposal_id: proposal_id.into(),
        author,
        channel: util::message_channel_from_i16(channel)?,
        text,
        created_at: Timestamp::from_secs(created_at),
        updated_at: updated_at.map(Timestamp::from_secs),
    })
}

fn create_message(conn: &mut SqliteConnection, message: Message) -> Result<()> {
    let proposal_rowid = resolve_proposal_rowid(conn, message.proposal_id.as_str())?;
    let author_rowid = resolve_user_rowid(conn, message.author.as_str())?;
    let new_message = models::NewMessage {
        id: message.id.as_ref(),
        proposal_rowid,
        author_rowid,
        channel: message.channel as i16,
        text: &message.text,
        created_at: message.created_at.as_secs(),
        updated_at: message.updated_at.map(Timestamp::as_secs),
    };
    diesel::insert_into(schema::messages::table)
        .values(&new_message)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_message(conn: &mut SqliteConnection, message: &Message) -> Result<()> {
    use schema::messages::dsl;
    let count = diesel::update(dsl::messages.filter(dsl::id.eq(message.id.as_str())))
        .set((
            dsl::text.eq(&message.text),
            dsl::updated_at.eq(message.updated_at.map(Timestamp::as_secs)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_message(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::messages::dsl;
    let count = diesel::delete(dsl::messages.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_message(conn: &mut SqliteConnection, id: &str) -> Result<Message> {
    use schema::messages::dsl;
    let entity = dsl::messages
        .filter(dsl::id.eq(id))
        .first::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?;
    message_from_entity(conn, entity)
}

fn messages_of_proposal(conn: &mut SqliteConnection, proposal_id: &str) -> Result<Vec<Message>> {
    use schema::messages::dsl;
    let proposal_rowid = resolve_proposal_rowid(conn, proposal_id)?;
    let entities = dsl::messages
        .filter(dsl::proposal_rowid.eq(&proposal_rowid))
        .order_by(dsl::created_at)
        .load::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut messages = Vec::with_capacity(entities.len());
    for entity in entities {
        messages.push(message_from_entity(conn, entity)?);
    }
    Ok(messages)
}
