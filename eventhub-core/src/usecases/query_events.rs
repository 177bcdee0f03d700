use super::{load_active_event, prelude::*};
use std::collections::HashMap;
use time::Date;

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub types: Vec<EventType>,
    /// The (UTC) calendar day of the event
    pub date: Option<Date>,
    pub tag: Option<String>,
}

/// An event together with its derived projections.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub event              : Event,
    // Users are only referenced weakly
    pub creator            : Option<User>,
    pub participants_count : usize,
}

pub fn get_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    load_active_event(repo, id)
}

pub fn list_events<R: EventRepo>(repo: &R, filter: &EventFilter) -> Result<Vec<Event>> {
    let (starts_at_or_after, starts_before) = match filter.date {
        Some(date) => {
            let (start, end) = Timestamp::day_range(date);
            (Some(start), Some(end))
        }
        None => (None, None),
    };
    let query = EventQuery {
        status: Some(EventStatus::ACTIVE.to_vec()),
        types: filter.types.clone(),
        starts_at_or_after,
        starts_before,
        tag_slug: filter
            .tag
            .as_deref()
            .map(slugify)
            .filter(|slug| !slug.is_empty()),
        ..Default::default()
    };
    Ok(repo.query_events(&query)?)
}

pub fn events_created_by<R: EventRepo>(repo: &R, user_id: &str) -> Result<Vec<Event>> {
    let query = EventQuery {
        status: Some(EventStatus::ACTIVE.to_vec()),
        created_by: Some(user_id.into()),
        ..Default::default()
    };
    Ok(repo.query_events(&query)?)
}

/// Active events the user is going to, most recently joined first.
pub fn events_participated_by<R>(repo: &R, user_id: &str) -> Result<Vec<Event>>
where
    R: EventRepo + ParticipantRepo,
{
    let mut events = vec![];
    for p in repo.participations_of_user(user_id, ParticipationStatus::Going)? {
        match repo.get_event(p.event_id.as_str()) {
            Ok(event) if event.is_active() => events.push(event),
            Ok(_) => {}
            Err(RepoError::NotFound) => {
                log::warn!("Participation refers to missing event {}", p.event_id);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(events)
}

pub fn load_event_details<R>(repo: &R, events: Vec<Event>) -> Result<Vec<EventDetails>>
where
    R: UserRepo + ParticipantRepo,
{
    let creator_ids: Vec<_> = events.iter().map(|e| e.creator_id.as_str()).collect();
    let creators: HashMap<_, _> = repo
        .get_users(&creator_ids)?
        .into_iter()
        .map(|u| (u.id.clone(), u))
        .collect();
    events
        .into_iter()
        .map(|event| {
            let participants_count =
                repo.count_participants(event.id.as_str(), ParticipationStatus::Going)?;
            let creator = creators.get(&event.creator_id).cloned();
            Ok(EventDetails {
                event,
                creator,
                participants_count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use eventhub_entities::builders::*;
    use time::macros::{date, datetime};

    #[test]
    fn get_only_active_events() {
        let db = MockDb::default();
        let pending = db.add_event(Event::build().finish());
        let rejected = db.add_event(Event::build().status(EventStatus::Rejected).finish());
        assert_eq!(pending, get_event(&db, pending.id.as_str()).unwrap());
        assert!(matches!(
            get_event(&db, rejected.id.as_str()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn filter_events_by_type_date_and_tag() {
        let db = MockDb::default();
        let day = Timestamp::from(datetime!(2024-06-01 18:00 UTC));
        let next_day = Timestamp::from(datetime!(2024-06-02 00:00 UTC));
        let concert = db.add_event(
            Event::build()
                .event_type(EventType::Concert)
                .event_date(day)
                .tags(vec!["Open Air"])
                .finish(),
        );
        let workshop = db.add_event(
            Event::build()
                .event_type(EventType::Workshop)
                .event_date(next_day)
                .finish(),
        );
        db.add_event(
            Event::build()
                .event_type(EventType::Concert)
                .event_date(day)
                .status(EventStatus::Removed)
                .finish(),
        );

        assert_eq!(2, list_events(&db, &EventFilter::default()).unwrap().len());

        let by_type = EventFilter {
            types: vec![EventType::Workshop, EventType::Sport],
            ..Default::default()
        };
        assert_eq!(vec![workshop], list_events(&db, &by_type).unwrap());

        let by_date = EventFilter {
            date: Some(date!(2024 - 06 - 01)),
            ..Default::default()
        };
        assert_eq!(vec![concert.clone()], list_events(&db, &by_date).unwrap());

        let by_tag = EventFilter {
            tag: Some("open-air".into()),
            ..Default::default()
        };
        assert_eq!(vec![concert], list_events(&db, &by_tag).unwrap());
    }

    #[test]
    fn participated_events_skip_inactive_ones() {
        let db = MockDb::default();
        let user = db.add_user(User::build().finish());
        let active = db.add_event(Event::build().finish());
        let removed = db.add_event(Event::build().status(EventStatus::Removed).finish());
        for event in [&active, &removed] {
            db.save_participant(&Participant {
                event_id: event.id.clone(),
                user_id: user.id.clone(),
                status: ParticipationStatus::Going,
                joined_at: Timestamp::now(),
            })
            .unwrap();
        }
        assert_eq!(
            vec![active],
            events_participated_by(&db, user.id.as_str()).unwrap()
        );
    }

    #[test]
    fn details_contain_creator_and_participants_count() {
        let db = MockDb::default();
        let creator = db.add_user(User::build().finish());
        let event = db.add_event(Event::build().creator(creator.id.as_str()).finish());
        let orphan = db.add_event(Event::build().finish());
        db.save_participant(&Participant {
            event_id: event.id.clone(),
            user_id: creator.id.clone(),
            status: ParticipationStatus::Going,
            joined_at: Timestamp::now(),
        })
        .unwrap();
        let details = load_event_details(&db, vec![event, orphan]).unwrap();
        assert_eq!(Some(creator), details[0].creator);
        assert_eq!(1, details[0].participants_count);
        assert_eq!(None, details[1].creator);
        assert_eq!(0, details[1].participants_count);
    }
}
