use super::prelude::*;

/// A going participant together with the user record.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantWithUser {
    pub participant: Participant,
    pub user: User,
}

/// Join an event as participant.
///
/// A previously declined participation is reused and flipped back to
/// going. The number of going participants is checked against the
/// capacity of the event, i.e. callers must run this within a single
/// exclusive transaction to prevent overbooking.
pub fn join_event<D>(
    db: &D,
    account_id: &str,
    event_id: &str,
) -> Result<(Participant, NotificationEvent)>
where
    D: UserRepo + EventRepo + ParticipantRepo,
{
    let account = super::authorize_account(db, account_id)?;
    let event = db.get_event(event_id)?;
    if !event.is_active() {
        return Err(InvalidState::EventInactive.into());
    }
    let existing = db.try_get_participant(event_id, account_id)?;
    if existing
        .as_ref()
        .is_some_and(|p| p.status == ParticipationStatus::Going)
    {
        return Err(Error::AlreadyParticipating);
    }
    let going_count = db.count_participants(event_id, ParticipationStatus::Going)?;
    if !event.has_capacity_for_one_more(going_count) {
        log::debug!(
            "Event {} is fully booked ({going_count} participants)",
            event.id
        );
        return Err(Error::EventFull);
    }
    let participant = Participant {
        event_id: event.id.clone(),
        user_id: account.id.clone(),
        status: ParticipationStatus::Going,
        joined_at: Timestamp::now(),
    };
    db.save_participant(&participant)?;
    let notification = NotificationEvent::EventJoined {
        title: event.title,
        creator_id: event.creator_id,
        participant_id: account.id,
        participant_name: account.username,
    };
    Ok((participant, notification))
}

/// Cancel the participation, keeping the record as declined.
pub fn cancel_participation<D>(db: &D, account_id: &str, event_id: &str) -> Result<()>
where
    D: UserRepo + ParticipantRepo,
{
    super::authorize_account(db, account_id)?;
    let mut participant = db
        .try_get_participant(event_id, account_id)?
        .filter(|p| p.status == ParticipationStatus::Going)
        .ok_or(RepoError::NotFound)?;
    participant.status = ParticipationStatus::Declined;
    db.save_participant(&participant)?;
    Ok(())
}

pub fn count_participants<D>(db: &D, event_id: &str) -> Result<usize>
where
    D: EventRepo + ParticipantRepo,
{
    let event = super::load_active_event(db, event_id)?;
    Ok(db.count_participants(event.id.as_str(), ParticipationStatus::Going)?)
}

/// Going participants of an active event, in the order they joined.
pub fn event_participants<D>(db: &D, event_id: &str) -> Result<Vec<ParticipantWithUser>>
where
    D: UserRepo + EventRepo + ParticipantRepo,
{
    let event = super::load_active_event(db, event_id)?;
    let participants = db.participants_of_event(event.id.as_str(), ParticipationStatus::Going)?;
    let user_ids: Vec<_> = participants.iter().map(|p| p.user_id.as_str()).collect();
    let mut users = db.get_users(&user_ids)?;
    Ok(participants
        .into_iter()
        .filter_map(|participant| {
            let pos = users.iter().position(|u| u.id == participant.user_id)?;
            let user = users.swap_remove(pos);
            Some(ParticipantWithUser { participant, user })
        })
        .collect())
}
