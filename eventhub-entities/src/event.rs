use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::*, location::*, primitive::InvalidPrimitive, tag::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id               : Id,
    pub title            : String,
    pub description      : String,
    pub event_date       : Timestamp,
    pub location         : Location,
    pub event_type       : EventType,
    pub max_participants : Option<u32>,
    pub price            : f64,
    pub address          : Option<String>,
    pub status           : EventStatus,
    pub creator_id       : Id,
    pub created_at       : Timestamp,
    pub updated_at       : Timestamp,
    pub tags             : Vec<Tag>,
    pub media            : Vec<Media>,
}

impl Event {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_verified(&self) -> bool {
        self.status == EventStatus::Verified
    }

    /// Whether one more participant fits, given the number
    /// of participants that are currently going.
    pub fn has_capacity_for_one_more(&self, going_count: usize) -> bool {
        self.max_participants
            .map_or(true, |max| going_count < max as usize)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    Concert,
    Exhibition,
    Meetup,
    Workshop,
    Sport,
    Festival,
    Other,
}

pub type EventStatusPrimitive = i16;

/// Moderation state of an event.
///
/// Only pending and verified events are active, i.e.
/// visible and open for participation. Inactive events
/// are never physically removed.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum EventStatus {
    Rejected = -2,
    Removed  = -1,
    Pending  =  0,
    Verified =  1,
}

impl EventStatus {
    pub const ACTIVE: [Self; 2] = [Self::Pending, Self::Verified];

    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

impl TryFrom<EventStatusPrimitive> for EventStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: EventStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<EventStatus> for EventStatusPrimitive {
    fn from(from: EventStatus) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

/// An attached image or video, displayed in ascending `order_index`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id          : Id,
    pub file_url    : String,
    pub file_type   : String,
    pub order_index : u32,
}
