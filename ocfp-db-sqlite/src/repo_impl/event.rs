use super::*;

impl EventRepo for DbReadOnly<'_> {
    fn create_event(&self, _event: Event) -> Result<()> {
        unreachable!();
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

impl EventRepo for DbReadWrite<'_> {
    fn create_event(&self, event: Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

impl EventRepo for DbConnection<'_> {
    fn create_event(&self, event: Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

fn load_event_formats(conn: &mut SqliteConnection, event_rowid: i64) -> Result<Vec<EventFormat>> {
    use schema::event_formats::dsl;
    Ok(dsl::event_formats
        .filter(dsl::event_rowid.eq(&event_rowid))
        .order_by(dsl::rowid)
        .load::<models::EventFormatEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::EventFormatEntity { id, name, .. }| EventFormat {
            id: id.into(),
            name,
        })
        .collect())
}

fn load_event_categories(
    conn: &mut SqliteConnection,
    event_rowid: i64,
) -> Result<Vec<EventCategory>> {
    use schema::event_categories::dsl;
    Ok(dsl::event_categories
        .filter(dsl::event_rowid.eq(&event_rowid))
        .order_by(dsl::rowid)
        .load::<models::EventCategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::EventCategoryEntity { id, name, .. }| EventCategory {
            id: id.into(),
            name,
        })
        .collect())
}

fn event_from_entity(conn: &mut SqliteConnection, entity: models::EventEntity) -> Result<Event> {
    let models::EventEntity {
        rowid,
        id,
        title,
        description,
        kind,
        owner_rowid,
        org_rowid,
        cfp_start,
        cfp_end,
        max_proposals,
        formats_required,
        categories_required,
        created_at,
    } = entity;
    let owner = load_user_id(conn, owner_rowid)?;
    let organization = org_rowid
        .map(|org_rowid| {
            use schema::organizations::dsl;
            dsl::organizations
                .select(dsl::id)
                .filter(dsl::rowid.eq(&org_rowid))
                .first::<String>(conn)
                .map_err(from_diesel_err)
                .map(Id::from)
        })
        .transpose()?;
    let formats = load_event_formats(conn, rowid)?;
    let categories = load_event_categories(conn, rowid)?;
    Ok(Event {
        id: id.into(),
        title,
        description,
        kind: util::event_kind_from_i16(kind)?,
        owner,
        organization,
        cfp_start: cfp_start.map(Timestamp::from_secs),
        cfp_end: cfp_end.map(Timestamp::from_secs),
        max_proposals: max_proposals.map(|max| max as u32),
        formats_required,
        categories_required,
        formats,
        categories,
        created_at: Timestamp::from_secs(created_at),
    })
}

fn create_event(conn: &mut SqliteConnection, event: Event) -> Result<()> {
    let owner_rowid = resolve_user_rowid(conn, event.owner.as_str())?;
    let org_rowid = event
        .organization
        .as_ref()
        .map(|org_id| resolve_org_rowid(conn, org_id.as_str()))
        .transpose()?;
    let new_event = models::NewEvent {
        id: event.id.as_ref(),
        title: &event.title,
        description: event.description.as_deref(),
        kind: event.kind as i16,
        owner_rowid,
        org_rowid,
        cfp_start: event.cfp_start.map(Timestamp::as_secs),
        cfp_end: event.cfp_end.map(Timestamp::as_secs),
        max_proposals: event.max_proposals.map(|max| max as i32),
        formats_required: event.formats_required,
        categories_required: event.categories_required,
        created_at: event.created_at.as_secs(),
    };
    conn.transaction::<_, TransactionError, _>(|conn| {
        diesel::insert_into(schema::events::table)
            .values(&new_event)
            .execute(conn)
            .map_err(from_diesel_err)?;
        let rowid = resolve_event_rowid(conn, new_event.id)?;
        for format in &event.formats {
            diesel::insert_into(schema::event_formats::table)
                .values(&models::NewEventFormat {
                    event_rowid: rowid,
                    id: format.id.as_ref(),
                    name: &format.name,
                })
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        for category in &event.categories {
            diesel::insert_into(schema::event_categories::table)
                .values(&models::NewEventCategory {
                    event_rowid: rowid,
                    id: category.id.as_ref(),
                    name: &category.name,
                })
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        Ok(())
    })
    .map_err(commit_err)?;
    Ok(())
}

fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::events::dsl;
    let entity = dsl::events
        .filter(dsl::id.eq(id))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    event_from_entity(conn, entity)
}

fn all_events_chronologically(conn: &mut SqliteConnection) -> Result<Vec<Event>> {
    use schema::events::dsl;
    let entities = dsl::events
        .order_by(dsl::created_at)
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut events = Vec::with_capacity(entities.len());
    for entity in entities {
        events.push(event_from_entity(conn, entity)?);
    }
    Ok(events)
}

fn count_events(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::events::dsl;
    Ok(dsl::events
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
