use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumString};

use crate::{id::*, primitive::InvalidPrimitive, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub event_id   : Id,
    pub user_id    : Id,
    pub parent_id  : Option<Id>,
    pub content    : String,
    // Cached projection of the votes, see `VoteTally::score()`
    pub score      : i64,
    pub status     : CommentStatus,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        self.status == CommentStatus::Deleted
    }

    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

pub type CommentStatusPrimitive = i16;

/// Deleted comments are kept as the parent
/// context of their replies.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CommentStatus {
    Visible = 0,
    Deleted = 1,
}

impl TryFrom<CommentStatusPrimitive> for CommentStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: CommentStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<CommentStatus> for CommentStatusPrimitive {
    fn from(from: CommentStatus) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentVote {
    pub comment_id : Id,
    pub user_id    : Id,
    pub vote_type  : VoteType,
    pub voted_at   : Timestamp,
}

pub type VoteTypePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum VoteType {
    Downvote = -1,
    Upvote   =  1,
}

impl TryFrom<VoteTypePrimitive> for VoteType {
    type Error = InvalidPrimitive;
    fn try_from(from: VoteTypePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<VoteType> for VoteTypePrimitive {
    fn from(from: VoteType) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

/// Number of up- and downvotes of a single comment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteTally {
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}
