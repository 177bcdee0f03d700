use super::{administration::query_pending_events, prelude::*};
use time::Duration;

pub const DEFAULT_ONLINE_WINDOW: Duration = Duration::minutes(15);
pub const DEFAULT_TOP_EVENTS_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsParams {
    /// Users active within this trailing window count as online
    pub online_window: Duration,
    pub top_events_limit: usize,
}

impl Default for StatisticsParams {
    fn default() -> Self {
        Self {
            online_window: DEFAULT_ONLINE_WINDOW,
            top_events_limit: DEFAULT_TOP_EVENTS_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopEvent {
    pub event: Event,
    pub participants: usize,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_users         : usize,
    pub total_events        : usize,
    pub active_events       : usize,
    pub verified_events     : usize,
    pub total_comments      : usize,
    pub today_registrations : usize,
    pub online_users        : usize,
    pub top_events          : Vec<TopEvent>,
    pub pending_events      : Vec<Event>,
}

/// Aggregate the current state of the platform.
pub fn statistics<D: Db>(
    db: &D,
    admin_id: &str,
    now: Timestamp,
    params: StatisticsParams,
) -> Result<Statistics> {
    super::authorize_admin(db, admin_id)?;
    let StatisticsParams {
        online_window,
        top_events_limit,
    } = params;
    let top_events = db
        .most_joined_events(&EventStatus::ACTIVE, top_events_limit)?
        .into_iter()
        .map(|(event, participants)| TopEvent {
            event,
            participants,
        })
        .collect();
    Ok(Statistics {
        total_users: db.count_users()?,
        total_events: db.count_events()?,
        active_events: db.count_events_with_status(&EventStatus::ACTIVE)?,
        verified_events: db.count_events_with_status(&[EventStatus::Verified])?,
        total_comments: db.count_comments_with_status(CommentStatus::Visible)?,
        today_registrations: db.count_users_created_since(now.start_of_local_day())?,
        online_users: db.count_users_online_since(now - online_window)?,
        top_events,
        pending_events: query_pending_events(db)?,
    })
}
