use super::*;

impl ParticipantRepo for DbReadOnly<'_> {
    fn save_participant(&self, _participant: &Participant) -> Result<()> {
        unreachable!();
    }
    fn try_get_participant(&self, event_id: &str, user_id: &str) -> Result<Option<Participant>> {
        try_get_participant(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn participants_of_event(
        &self,
        event_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>> {
        participants_of_event(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>> {
        participations_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
    fn count_participants(&self, event_id: &str, status: ParticipationStatus) -> Result<usize> {
        count_participants(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn count_participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<usize> {
        count_participations_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

impl ParticipantRepo for DbReadWrite<'_> {
    fn save_participant(&self, participant: &Participant) -> Result<()> {
        save_participant(&mut self.conn.borrow_mut(), participant)
    }
    fn try_get_participant(&self, event_id: &str, user_id: &str) -> Result<Option<Participant>> {
        try_get_participant(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn participants_of_event(
        &self,
        event_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>> {
        participants_of_event(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>> {
        participations_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
    fn count_participants(&self, event_id: &str, status: ParticipationStatus) -> Result<usize> {
        count_participants(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn count_participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<usize> {
        count_participations_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

impl ParticipantRepo for DbConnection<'_> {
    fn save_participant(&self, participant: &Participant) -> Result<()> {
        save_participant(&mut self.conn.borrow_mut(), participant)
    }
    fn try_get_participant(&self, event_id: &str, user_id: &str) -> Result<Option<Participant>> {
        try_get_participant(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn participants_of_event(
        &self,
        event_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>> {
        participants_of_event(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>> {
        participations_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
    fn count_participants(&self, event_id: &str, status: ParticipationStatus) -> Result<usize> {
        count_participants(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn count_participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<usize> {
        count_participations_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

fn load_participant(model: models::EventParticipant) -> Result<Participant> {
    let models::EventParticipant {
        event_id,
        user_id,
        status,
        joined_at,
    } = model;
    Ok(Participant {
        event_id: event_id.into(),
        user_id: user_id.into(),
        status: load_primitive(status, "participation status")?,
        joined_at: Timestamp::from_millis(joined_at),
    })
}

fn save_participant(conn: &mut SqliteConnection, p: &Participant) -> Result<()> {
    let model = models::EventParticipant {
        event_id: p.event_id.to_string(),
        user_id: p.user_id.to_string(),
        status: p.status.into(),
        joined_at: p.joined_at.as_millis(),
    };
    diesel::replace_into(schema::event_participants::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_participant(
    conn: &mut SqliteConnection,
    event_id: &str,
    user_id: &str,
) -> Result<Option<Participant>> {
    use schema::event_participants::dsl;
    dsl::event_participants
        .filter(dsl::event_id.eq(event_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::EventParticipant>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_participant)
        .transpose()
}

fn participants_of_event(
    conn: &mut SqliteConnection,
    event_id: &str,
    status: ParticipationStatus,
) -> Result<Vec<Participant>> {
    use schema::event_participants::dsl;
    dsl::event_participants
        .filter(dsl::event_id.eq(event_id))
        .filter(dsl::status.eq(ParticipationStatusPrimitive::from(status)))
        .order_by(dsl::joined_at)
        .then_order_by(dsl::user_id)
        .load::<models::EventParticipant>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_participant)
        .collect()
}

fn participations_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    status: ParticipationStatus,
) -> Result<Vec<Participant>> {
    use schema::event_participants::dsl;
    dsl::event_participants
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::status.eq(ParticipationStatusPrimitive::from(status)))
        .order_by(dsl::joined_at.desc())
        .then_order_by(dsl::event_id)
        .load::<models::EventParticipant>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_participant)
        .collect()
}

fn count_participants(
    conn: &mut SqliteConnection,
    event_id: &str,
    status: ParticipationStatus,
) -> Result<usize> {
    use schema::event_participants::dsl;
    let n = dsl::event_participants
        .select(diesel::dsl::count_star())
        .filter(dsl::event_id.eq(event_id))
        .filter(dsl::status.eq(ParticipationStatusPrimitive::from(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn count_participations_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    status: ParticipationStatus,
) -> Result<usize> {
    use schema::event_participants::dsl;
    let n = dsl::event_participants
        .select(diesel::dsl::count_star())
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::status.eq(ParticipationStatusPrimitive::from(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}
