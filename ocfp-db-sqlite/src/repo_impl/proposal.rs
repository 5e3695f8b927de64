use super::*;

impl ProposalRepo for DbReadOnly<'_> {
    fn create_proposal(&self, _proposal: Proposal) -> Result<()> {
        unreachable!();
    }
    fn update_proposal(&self, _proposal: &Proposal) -> Result<()> {
        unreachable!();
    }
    fn update_proposal_status(&self, _id: &str, _status: ProposalStatus) -> Result<()> {
        unreachable!();
    }
    fn delete_proposal(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_proposal(&self, id: &str) -> Result<Proposal> {
        get_proposal(&mut self.conn.borrow_mut(), id)
    }
    fn get_proposal_of_talk(&self, talk_id: &str, event_id: &str) -> Result<Option<Proposal>> {
        get_proposal_of_talk(&mut self.conn.borrow_mut(), talk_id, event_id)
    }
    fn proposals_of_event(&self, event_id: &str) -> Result<Vec<Proposal>> {
        proposals_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn proposals_of_speaker(&self, event_id: &str, user_id: &str) -> Result<Vec<Proposal>> {
        proposals_of_speaker(&mut self.conn.borrow_mut(), event_id, user_id)
    }
}

impl ProposalRepo for DbReadWrite<'_> {
    fn create_proposal(&self, proposal: Proposal) -> Result<()> {
        create_proposal(&mut self.conn.borrow_mut(), proposal)
    }
    fn update_proposal(&self, proposal: &Proposal) -> Result<()> {
        update_proposal(&mut self.conn.borrow_mut(), proposal)
    }
    fn update_proposal_status(&self, id: &str, status: ProposalStatus) -> Result<()> {
        update_proposal_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_proposal(&self, id: &str) -> Result<()> {
        delete_proposal(&mut self.conn.borrow_mut(), id)
    }

    fn get_proposal(&self, id: &str) -> Result<Proposal> {
        get_proposal(&mut self.conn.borrow_mut(), id)
    }
    fn get_proposal_of_talk(&self, talk_id: &str, event_id: &str) -> Result<Option<Proposal>> {
        get_proposal_of_talk(&mut self.conn.borrow_mut(), talk_id, event_id)
    }
    fn proposals_of_event(&self, event_id: &str) -> Result<Vec<Proposal>> {
        proposals_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn proposals_of_speaker(&self, event_id: &str, user_id: &str) -> Result<Vec<Proposal>> {
        proposals_of_speaker(&mut self.conn.borrow_mut(), event_id, user_id)
    }
}

impl ProposalRepo for DbConnection<'_> {
    fn create_proposal(&self, proposal: Proposal) -> Result<()> {
        create_proposal(&mut self.conn.borrow_mut(), proposal)
    }
    fn update_proposal(&self, proposal: &Proposal) -> Result<()> {
        update_proposal(&mut self.conn.borrow_mut(), proposal)
    }
    fn update_proposal_status(&self, id: &str, status: ProposalStatus) -> Result<()> {
        update_proposal_status(&mut self.conn.borrow_mut(), id, status)
    }
    fn delete_proposal(&self, id: &str) -> Result<()> {
        delete_proposal(&mut self.conn.borrow_mut(), id)
    }

    fn get_proposal(&self, id: &str) -> Result<Proposal> {
        get_proposal(&mut self.conn.borrow_mut(), id)
    }
    fn get_proposal_of_talk(&self, talk_id: &str, event_id: &str) -> Result<Option<Proposal>> {
        get_proposal_of_talk(&mut self.conn.borrow_mut(), talk_id, event_id)
    }
    fn proposals_of_event(&self, event_id: &str) -> Result<Vec<Proposal>> {
        proposals_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn proposals_of_speaker(&self, event_id: &str, user_id: &str) -> Result<Vec<Proposal>> {
        proposals_of_speaker(&mut self.conn.borrow_mut(), event_id, user_id)
    }
}

fn load_proposal_speakers(conn: &mut SqliteConnection, proposal_rowid: i64) -> Result<Vec<Id>> {
    use schema::{proposal_speakers, users};
    Ok(proposal_speakers::table
        .inner_join(users::table)
        .select(users::id)
        .filter(proposal_speakers::proposal_rowid.eq(&proposal_rowid))
        .order_by(users::rowid)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_proposal_formats(conn: &mut SqliteConnection, proposal_rowid: i64) -> Result<Vec<Id>> {
    use schema::proposal_formats::dsl;
    Ok(dsl::proposal_formats
        .select(dsl::format_id)
        .filter(dsl::proposal_rowid.eq(&proposal_rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_proposal_categories(conn: &mut SqliteConnection, proposal_rowid: i64) -> Result<Vec<Id>> {
    use schema::proposal_categories::dsl;
    Ok(dsl::proposal_categories
        .select(dsl::category_id)
        .filter(dsl::proposal_rowid.eq(&proposal_rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

// The speaker set is copied from the talk at submission time, so the
// associations are replaced wholesale instead of diffing.
fn replace_proposal_associations(
    conn: &mut SqliteConnection,
    proposal_rowid: i64,
    speakers: &[Id],
    formats: &[Id],
    categories: &[Id],
) -> Result<()> {
    {
        use schema::proposal_speakers::dsl;
        diesel::delete(dsl::proposal_speakers.filter(dsl::proposal_rowid.eq(proposal_rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
        for speaker in speakers {
            let user_rowid = resolve_user_rowid(conn, speaker.as_str())?;
            diesel::insert_or_ignore_into(dsl::proposal_speakers)
                .values(&models::NewProposalSpeaker {
                    proposal_rowid,
                    user_rowid,
                })
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
    }
    {
        use schema::proposal_formats::dsl;
        diesel::delete(dsl::proposal_formats.filter(dsl::proposal_rowid.eq(proposal_rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
        let formats: Vec<_> = formats
            .iter()
            .map(|format_id| models::NewProposalFormat {
                proposal_rowid,
                format_id: format_id.as_ref(),
            })
            .collect();
        diesel::insert_or_ignore_into(dsl::proposal_formats)
            .values(&formats)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    {
        use schema::proposal_categories::dsl;
        diesel::delete(dsl::proposal_categories.filter(dsl::proposal_rowid.eq(proposal_rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
        let categories: Vec<_> = categories
            .iter()
            .map(|category_id| models::NewProposalCategory {
                proposal_rowid,
                category_id: category_id.as_ref(),
            })
            .collect();
        diesel::insert_or_ignore_into(dsl::proposal_categories)
            .values(&categories)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn proposal_from_entity(
    conn: &mut SqliteConnection,
    entity: models::ProposalEntity,
) -> Result<Proposal> {
    let models::ProposalEntity {
        rowid,
        id,
        talk_rowid,
        event_rowid,
        title,
        description,
        level,
        language,
        references,
        comments,
        status,
        created_at,
        updated_at,
    } = entity;
    let talk_id = {
        use schema::talks::dsl;
        dsl::talks
            .select(dsl::id)
            .filter(dsl::rowid.eq(&talk_rowid))
            .first::<String>(conn)
            .map_err(from_diesel_err)?
    };
    let event_id = {
        use schema::events::dsl;
        dsl::events
            .select(dsl::id)
            .filter(dsl::rowid.eq(&event_rowid))
            .first::<String>(conn)
            .map_err(from_diesel_err)?
    };
    let speakers = load_proposal_speakers(conn, rowid)?;
    let formats = load_proposal_formats(conn, rowid)?;
    let categories = load_proposal_categories(conn, rowid)?;
    Ok(Proposal {
        id: id.into(),
        talk_id: talk_id.into(),
        event_id: event_id.into(),
        title,
        description,
        level: level.map(util::talk_level_from_i16).transpose()?,
        language,
        references,
        comments,
        status: util::proposal_status_from_i16(status)?,
        speakers,
        formats,
        categories,
        created_at: Timestamp::from_secs(created_at),
        updated_at: Timestamp::from_secs(updated_at),
    })
}

fn create_proposal(conn: &mut SqliteConnection, proposal: Proposal) -> Result<()> {
    let talk_rowid = resolve_talk_rowid(conn, proposal.talk_id.as_str())?;
    let event_rowid = resolve_event_rowid(conn, proposal.event_id.as_str())?;
    let new_proposal = models::NewProposal {
        id: proposal.id.as_ref(),
        talk_rowid,
        event_rowid,
        title: &proposal.title,
        description: proposal.description.as_deref(),
        level: proposal.level.map(|level| level as i16),
        language: proposal.language.as_deref(),
        references: proposal.references.as_deref(),
        comments: proposal.comments.as_deref(),
        status: proposal.status as i16,
        created_at: proposal.created_at.as_secs(),
        updated_at: proposal.updated_at.as_secs(),
    };
    conn.transaction::<_, TransactionError, _>(|conn| {
        diesel::insert_into(schema::proposals::table)
            .values(&new_proposal)
            .execute(conn)
            .map_err(from_diesel_err)?;
        let rowid = resolve_proposal_rowid(conn, new_proposal.id)?;
        replace_proposal_associations(
            conn,
            rowid,
            &proposal.speakers,
            &proposal.formats,
            &proposal.categories,
        )?;
        Ok(())
    })
    .map_err(commit_err)?;
    Ok(())
}

fn update_proposal(conn: &mut SqliteConnection, proposal: &Proposal) -> Result<()> {
    let rowid = resolve_proposal_rowid(conn, proposal.id.as_ref())?;
    let changed = models::ChangedProposal {
        title: &proposal.title,
        description: proposal.description.as_deref(),
        level: proposal.level.map(|level| level as i16),
        language: proposal.language.as_deref(),
        references: proposal.references.as_deref(),
        comments: proposal.comments.as_deref(),
        updated_at: proposal.updated_at.as_secs(),
    };
    conn.transaction::<_, TransactionError, _>(|conn| {
        use schema::proposals::dsl;
        diesel::update(dsl::proposals.filter(dsl::rowid.eq(&rowid)))
            .set(&changed)
            .execute(conn)
            .map_err(from_diesel_err)?;
        replace_proposal_associations(
            conn,
            rowid,
            &proposal.speakers,
            &proposal.formats,
            &proposal.categories,
        )?;
        Ok(())
    })
    .map_err(commit_err)?;
    Ok(())
}

fn update_proposal_status(
    conn: &mut SqliteConnection,
    id: &str,
    status: ProposalStatus,
) -> Result<()> {
    use schema::proposals::dsl;
    let count = diesel::update(dsl::proposals.filter(dsl::id.eq(id)))
        .set(dsl::status.eq(status as i16))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_proposal(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    let rowid = resolve_proposal_rowid(conn, id)?;
    conn.transaction::<_, TransactionError, _>(|conn| {
        {
            use schema::proposal_speakers::dsl;
            diesel::delete(dsl::proposal_speakers.filter(dsl::proposal_rowid.eq(rowid)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        {
            use schema::proposal_formats::dsl;
            diesel::delete(dsl::proposal_formats.filter(dsl::proposal_rowid.eq(rowid)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        {
            use schema::proposal_categories::dsl;
            diesel::delete(dsl::proposal_categories.filter(dsl::proposal_rowid.eq(rowid)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        {
            use schema::ratings::dsl;
            diesel::delete(dsl::ratings.filter(dsl::proposal_rowid.eq(rowid)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        {
            use schema::messages::dsl;
            diesel::delete(dsl::messages.filter(dsl::proposal_rowid.eq(rowid)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        use schema::proposals::dsl;
        diesel::delete(dsl::proposals.filter(dsl::rowid.eq(rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
        Ok(())
    })
    .map_err(commit_err)?;
    Ok(())
}

fn get_proposal(conn: &mut SqliteConnection, id: &str) -> Result<Proposal> {
    use schema::proposals::dsl;
    let entity = dsl::proposals
        .filter(dsl::id.eq(id))
        .first::<models::ProposalEntity>(conn)
        .map_err(from_diesel_err)?;
    proposal_from_entity(conn, entity)
}

fn get_proposal_of_talk(
    conn: &mut SqliteConnection,
    talk_id: &str,
    event_id: &str,
) -> Result<Option<Proposal>> {
    use schema::proposals::dsl;
    let talk_rowid = match resolve_talk_rowid(conn, talk_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(None),
        Err(err) => return Err(err),
    };
    let event_rowid = match resolve_event_rowid(conn, event_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(None),
        Err(err) => return Err(err),
    };
    let entity = dsl::proposals
        .filter(dsl::talk_rowid.eq(&talk_rowid))
        .filter(dsl::event_rowid.eq(&event_rowid))
        .first::<models::ProposalEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    entity
        .map(|entity| proposal_from_entity(conn, entity))
        .transpose()
}

fn proposals_of_event(conn: &mut SqliteConnection, event_id: &str) -> Result<Vec<Proposal>> {
    use schema::proposals::dsl;
    let event_rowid = resolve_event_rowid(conn, event_id)?;
    let entities = dsl::proposals
        .filter(dsl::event_rowid.eq(&event_rowid))
        .order_by(dsl::created_at)
        .load::<models::ProposalEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut proposals = Vec::with_capacity(entities.len());
    for entity in entities {
        proposals.push(proposal_from_entity(conn, entity)?);
    }
    Ok(proposals)
}

fn proposals_of_speaker(
    conn: &mut SqliteConnection,
    event_id: &str,
    user_id: &str,
) -> Result<Vec<Proposal>> {
    use schema::{proposal_speakers, proposals};
    let event_rowid = resolve_event_rowid(conn, event_id)?;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let entities = proposals::table
        .filter(proposals::event_rowid.eq(&event_rowid))
        .filter(
            proposals::rowid.eq_any(
                proposal_speakers::table
                    .select(proposal_speakers::proposal_rowid)
                    .filter(proposal_speakers::user_rowid.eq(&user_rowid)),
            ),
        )
        .order_by(proposals::created_at)
        .load::<models::ProposalEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut proposals = Vec::with_capacity(entities.len());
    for entity in entities {
        proposals.push(proposal_from_entity(conn, entity)?);
    }
    Ok(proposals)
}
