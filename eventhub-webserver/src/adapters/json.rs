pub use eventhub_boundary::*;

use crate::core::{entities as e, usecases};
use time::UtcOffset;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn new_user(from: RegisterRequest) -> usecases::NewUser {
        let RegisterRequest {
            username,
            email,
            password,
            role,
        } = from;
        usecases::NewUser {
            username,
            email,
            password,
            role,
        }
    }

    pub fn new_event(from: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            title,
            description,
            event_date,
            latitude,
            longitude,
            event_type,
            max_participants,
            price,
            tags,
            address,
            media,
        } = from;
        usecases::NewEvent {
            title,
            description,
            event_date: event_date.into(),
            location: e::Location::new(latitude, longitude),
            event_type: event_type.into(),
            max_participants,
            price,
            address,
            tags,
            media: media
                .into_iter()
                .map(|NewMedia { file_url, file_type }| usecases::NewMedia {
                    file_url,
                    file_type,
                })
                .collect(),
        }
    }

    /// The position can only be updated as a whole.
    pub fn try_update_event(
        from: UpdateEvent,
    ) -> Result<usecases::UpdateEvent, usecases::Error> {
        let UpdateEvent {
            title,
            description,
            event_date,
            latitude,
            longitude,
            event_type,
            max_participants,
            price,
            address,
            tags,
        } = from;
        let location = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(e::Location::new(lat, lon)),
            (None, None) => None,
            _ => return Err(usecases::Error::InvalidPosition),
        };
        Ok(usecases::UpdateEvent {
            title,
            description,
            event_date: event_date.map(Into::into),
            location,
            event_type: event_type.map(Into::into),
            max_participants,
            price,
            address,
            tags,
        })
    }

    pub fn event_filter(from: EventFilter) -> usecases::EventFilter {
        let EventFilter { types, date, tags } = from;
        usecases::EventFilter {
            types: types.into_iter().map(Into::into).collect(),
            date: date.map(|d| d.to_offset(UtcOffset::UTC).date()),
            tag: tags,
        }
    }

    pub fn new_comment(from: NewComment) -> usecases::NewComment {
        let NewComment { content, parent_id } = from;
        usecases::NewComment { content, parent_id }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    fn count(n: usize) -> u64 {
        u64::try_from(n).unwrap_or(u64::MAX)
    }

    pub fn event_details(from: usecases::EventDetails) -> Event {
        let usecases::EventDetails {
            event,
            creator,
            participants_count,
        } = from;
        Event {
            creator: creator.map(Into::into),
            participants_count: count(participants_count),
            ..event.into()
        }
    }

    pub fn participant_with_user(from: usecases::ParticipantWithUser) -> Participant {
        let usecases::ParticipantWithUser { participant, user } = from;
        Participant {
            user: Some(user.into()),
            ..participant.into()
        }
    }

    fn comment_with_author(from: usecases::CommentWithAuthor) -> Comment {
        let usecases::CommentWithAuthor { comment, author } = from;
        Comment {
            user: author.map(Into::into),
            ..comment.into()
        }
    }

    pub fn comment_thread(from: usecases::CommentThread) -> Comment {
        let usecases::CommentThread { comment, replies } = from;
        Comment {
            replies: replies.into_iter().map(comment_with_author).collect(),
            ..comment_with_author(comment)
        }
    }

    pub fn vote_result(from: usecases::VoteResult) -> VoteResult {
        let usecases::VoteResult { comment, vote } = from;
        VoteResult {
            comment_id: comment.id.into(),
            score: comment.score,
            vote_type: vote.map(Into::into),
        }
    }

    pub fn dashboard(from: usecases::Dashboard) -> Dashboard {
        let usecases::Dashboard {
            created_events,
            participated_events,
            comments,
            rating,
        } = from;
        Dashboard {
            created_events: count(created_events),
            participated_events: count(participated_events),
            comments: count(comments),
            rating,
        }
    }

    /// The pending events are passed separately
    /// with their details already loaded.
    pub fn statistics(
        from: usecases::Statistics,
        pending_events: Vec<usecases::EventDetails>,
    ) -> Statistics {
        let usecases::Statistics {
            total_users,
            total_events,
            active_events,
            verified_events,
            total_comments,
            today_registrations,
            online_users,
            top_events,
            pending_events: _,
        } = from;
        Statistics {
            total_users: count(total_users),
            total_events: count(total_events),
            active_events: count(active_events),
            verified_events: count(verified_events),
            total_comments: count(total_comments),
            today_registrations: count(today_registrations),
            online_users: count(online_users),
            top_events: top_events
                .into_iter()
                .map(|usecases::TopEvent { event, participants }| TopEvent {
                    event_id: event.id.into(),
                    title: event.title,
                    participants: count(participants),
                })
                .collect(),
            pending_events: pending_events.into_iter().map(event_details).collect(),
        }
    }
}
