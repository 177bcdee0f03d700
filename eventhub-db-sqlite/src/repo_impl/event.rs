use super::*;
use std::collections::HashMap;

impl EventRepo for DbReadOnly<'_> {
    fn create_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn update_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn query_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        query_events(&mut self.conn.borrow_mut(), query)
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
    fn count_events_with_status(&self, status: &[EventStatus]) -> Result<usize> {
        count_events_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_events_created_by(&self, creator_id: &str, status: &[EventStatus]) -> Result<usize> {
        count_events_created_by(&mut self.conn.borrow_mut(), creator_id, status)
    }
    fn most_joined_events(
        &self,
        status: &[EventStatus],
        limit: usize,
    ) -> Result<Vec<(Event, usize)>> {
        most_joined_events(&mut self.conn.borrow_mut(), status, limit)
    }
}

impl EventRepo for DbReadWrite<'_> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn query_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        query_events(&mut self.conn.borrow_mut(), query)
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
    fn count_events_with_status(&self, status: &[EventStatus]) -> Result<usize> {
        count_events_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_events_created_by(&self, creator_id: &str, status: &[EventStatus]) -> Result<usize> {
        count_events_created_by(&mut self.conn.borrow_mut(), creator_id, status)
    }
    fn most_joined_events(
        &self,
        status: &[EventStatus],
        limit: usize,
    ) -> Result<Vec<(Event, usize)>> {
        most_joined_events(&mut self.conn.borrow_mut(), status, limit)
    }
}

impl EventRepo for DbConnection<'_> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn query_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        query_events(&mut self.conn.borrow_mut(), query)
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
    fn count_events_with_status(&self, status: &[EventStatus]) -> Result<usize> {
        count_events_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_events_created_by(&self, creator_id: &str, status: &[EventStatus]) -> Result<usize> {
        count_events_created_by(&mut self.conn.borrow_mut(), creator_id, status)
    }
    fn most_joined_events(
        &self,
        status: &[EventStatus],
        limit: usize,
    ) -> Result<Vec<(Event, usize)>> {
        most_joined_events(&mut self.conn.borrow_mut(), status, limit)
    }
}

fn new_event(e: &Event) -> models::NewEvent<'_> {
    models::NewEvent {
        id: e.id.as_str(),
        title: &e.title,
        description: &e.description,
        event_date: e.event_date.as_millis(),
        lat: e.location.lat,
        lon: e.location.lon,
        event_type: e.event_type.as_ref(),
        max_participants: e.max_participants.map(i64::from),
        price: e.price,
        address: e.address.as_deref(),
        status: e.status.into(),
        creator_id: e.creator_id.as_str(),
        created_at: e.created_at.as_millis(),
        updated_at: e.updated_at.as_millis(),
    }
}

fn status_primitives(status: &[EventStatus]) -> Vec<EventStatusPrimitive> {
    status.iter().copied().map(Into::into).collect()
}

fn insert_tags_and_media(conn: &mut SqliteConnection, e: &Event) -> std::result::Result<(), DieselError> {
    let tags: Vec<_> = e
        .tags
        .iter()
        .map(|tag| models::NewEventTag {
            event_id: e.id.as_str(),
            tag_id: tag.id.as_str(),
        })
        .collect();
    if !tags.is_empty() {
        diesel::insert_or_ignore_into(schema::event_tags::table)
            .values(&tags)
            .execute(conn)?;
    }
    let media: Vec<_> = e
        .media
        .iter()
        .map(|m| models::EventMedia {
            id: m.id.to_string(),
            event_id: e.id.to_string(),
            file_url: m.file_url.clone(),
            file_type: m.file_type.clone(),
            order_index: i32::try_from(m.order_index).unwrap_or(i32::MAX),
        })
        .collect();
    if !media.is_empty() {
        diesel::insert_into(schema::event_media::table)
            .values(&media)
            .execute(conn)?;
    }
    Ok(())
}

fn create_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::events::table)
            .values(&new_event(e))
            .execute(conn)?;
        insert_tags_and_media(conn, e)
    })
    .map_err(from_diesel_err)
}

fn update_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    use schema::{event_media::dsl as m_dsl, event_tags::dsl as et_dsl, events::dsl as e_dsl};
    conn.transaction::<_, DieselError, _>(|conn| {
        let count = diesel::update(e_dsl::events.filter(e_dsl::id.eq(e.id.as_str())))
            .set(&new_event(e))
            .execute(conn)?;
        if count == 0 {
            return Err(DieselError::NotFound);
        }
        diesel::delete(et_dsl::event_tags.filter(et_dsl::event_id.eq(e.id.as_str())))
            .execute(conn)?;
        diesel::delete(m_dsl::event_media.filter(m_dsl::event_id.eq(e.id.as_str())))
            .execute(conn)?;
        insert_tags_and_media(conn, e)
    })
    .map_err(from_diesel_err)
}

fn load_event(conn: &mut SqliteConnection, entity: models::EventEntity) -> Result<Event> {
    use schema::{event_media::dsl as m_dsl, event_tags::dsl as et_dsl, tags::dsl as t_dsl};
    let models::EventEntity {
        id,
        title,
        description,
        event_date,
        lat,
        lon,
        event_type,
        max_participants,
        price,
        address,
        status,
        creator_id,
        created_at,
        updated_at,
    } = entity;
    let tags = et_dsl::event_tags
        .inner_join(t_dsl::tags)
        .select((t_dsl::id, t_dsl::name, t_dsl::slug, t_dsl::created_at))
        .filter(et_dsl::event_id.eq(&id))
        .order_by(t_dsl::name)
        .load::<models::Tag>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(tag::load_tag)
        .collect();
    let media = m_dsl::event_media
        .filter(m_dsl::event_id.eq(&id))
        .order_by(m_dsl::order_index)
        .load::<models::EventMedia>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::EventMedia {
                 id,
                 event_id: _,
                 file_url,
                 file_type,
                 order_index,
             }| Media {
                id: id.into(),
                file_url,
                file_type,
                order_index: u32::try_from(order_index).unwrap_or_default(),
            },
        )
        .collect();
    Ok(Event {
        id: id.into(),
        title,
        description,
        event_date: Timestamp::from_millis(event_date),
        location: Location::new(lat, lon),
        event_type: load_enum(&event_type, "event type")?,
        max_participants: max_participants.and_then(|max| u32::try_from(max).ok()),
        price,
        address,
        status: load_primitive(status, "event status")?,
        creator_id: creator_id.into(),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
        tags,
        media,
    })
}

fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::events::dsl;
    let entity = dsl::events
        .filter(dsl::id.eq(id))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    load_event(conn, entity)
}

fn query_events(conn: &mut SqliteConnection, query: &EventQuery) -> Result<Vec<Event>> {
    use schema::{event_tags::dsl as et_dsl, events::dsl, tags::dsl as t_dsl};
    let EventQuery {
        status,
        types,
        created_by,
        starts_at_or_after,
        starts_before,
        tag_slug,
    } = query;
    let mut q = dsl::events.into_boxed();
    if let Some(status) = status {
        q = q.filter(dsl::status.eq_any(status_primitives(status)));
    }
    if !types.is_empty() {
        let types: Vec<_> = types.iter().map(|t| t.as_ref().to_owned()).collect();
        q = q.filter(dsl::event_type.eq_any(types));
    }
    if let Some(creator_id) = created_by {
        q = q.filter(dsl::creator_id.eq(creator_id.as_str()));
    }
    if let Some(ts) = starts_at_or_after {
        q = q.filter(dsl::event_date.ge(ts.as_millis()));
    }
    if let Some(ts) = starts_before {
        q = q.filter(dsl::event_date.lt(ts.as_millis()));
    }
    if let Some(slug) = tag_slug {
        q = q.filter(
            dsl::id.eq_any(
                et_dsl::event_tags
                    .inner_join(t_dsl::tags)
                    .filter(t_dsl::slug.eq(slug))
                    .select(et_dsl::event_id),
            ),
        );
    }
    let entities = q
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id) // disambiguation of equal time stamps
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| load_event(conn, entity))
        .collect()
}

fn count_events(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::events::dsl;
    let n = dsl::events
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn count_events_with_status(conn: &mut SqliteConnection, status: &[EventStatus]) -> Result<usize> {
    use schema::events::dsl;
    let n = dsl::events
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::status.eq_any(status_primitives(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn count_events_created_by(
    conn: &mut SqliteConnection,
    creator_id: &str,
    status: &[EventStatus],
) -> Result<usize> {
    use schema::events::dsl;
    let n = dsl::events
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::creator_id.eq(creator_id))
        .filter(dsl::status.eq_any(status_primitives(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn most_joined_events(
    conn: &mut SqliteConnection,
    status: &[EventStatus],
    limit: usize,
) -> Result<Vec<(Event, usize)>> {
    use schema::{event_participants::dsl as p_dsl, events::dsl as e_dsl};
    let going = ParticipationStatusPrimitive::from(ParticipationStatus::Going);
    let participants: HashMap<String, i64> = p_dsl::event_participants
        .filter(p_dsl::status.eq(going))
        .group_by(p_dsl::event_id)
        .select((p_dsl::event_id, diesel::dsl::count_star()))
        .load::<(String, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .collect();
    let mut ranking: Vec<(String, i64, usize)> = e_dsl::events
        .select((e_dsl::id, e_dsl::created_at))
        .filter(e_dsl::status.eq_any(status_primitives(status)))
        .load::<(String, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, created_at)| {
            let n = participants.get(&id).copied().map(count).unwrap_or(0);
            (id, created_at, n)
        })
        .collect();
    // Most participants first, newest first on ties
    ranking.sort_by(|(_, lhs_created, lhs_n), (_, rhs_created, rhs_n)| {
        rhs_n.cmp(lhs_n).then(rhs_created.cmp(lhs_created))
    });
    ranking.truncate(limit);
    ranking
        .into_iter()
        .map(|(id, _, n)| Ok((get_event(conn, &id)?, n)))
        .collect()
}
