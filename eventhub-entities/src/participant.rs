use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::AsRefStr;

use crate::{id::Id, primitive::InvalidPrimitive, time::Timestamp};

/// Relationship of a user to an event.
///
/// A record is kept across join/cancel cycles and only its
/// status flips, so `joined_at` reflects the latest join.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub event_id  : Id,
    pub user_id   : Id,
    pub status    : ParticipationStatus,
    pub joined_at : Timestamp,
}

pub type ParticipationStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParticipationStatus {
    Declined = 0,
    Going    = 1,
}

impl TryFrom<ParticipationStatusPrimitive> for ParticipationStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: ParticipationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<ParticipationStatus> for ParticipationStatusPrimitive {
    fn from(from: ParticipationStatus) -> Self {
        from.to_i16().unwrap_or_default()
    }
}
