use serde::{Deserialize, Deserializer, Serialize};
use time::{serde::rfc3339, OffsetDateTime};

#[cfg(feature = "entity-conversions")]
mod conv;

// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ---   accounts   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id          : String,
    pub username    : String,
    pub email       : String,
    pub role        : UserRole,
    pub avatar_url  : Option<String>,
    pub is_blocked  : bool,
    #[serde(with = "rfc3339::option")]
    pub last_online : Option<OffsetDateTime>,
    #[serde(with = "rfc3339")]
    pub created_at  : OffsetDateTime,
    #[serde(with = "rfc3339")]
    pub updated_at  : OffsetDateTime,
}

/// The public summary of a user that is embedded
/// into other resources.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserShort {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// Activity summary of the current user
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Dashboard {
    pub created_events      : u64,
    pub participated_events : u64,
    pub comments            : u64,
    /// Sum of the scores of all comments
    pub rating              : i64,
}

// ---   events   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Concert,
    Exhibition,
    Meetup,
    Workshop,
    Sport,
    Festival,
    Other,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEvent {
    pub title            : String,
    pub description      : String,
    #[serde(with = "rfc3339")]
    pub event_date       : OffsetDateTime,
    pub latitude         : f64,
    pub longitude        : f64,
    #[serde(rename = "type")]
    pub event_type       : EventType,
    #[serde(default)]
    pub max_participants : Option<u32>,
    #[serde(default)]
    pub price            : f64,
    #[serde(default)]
    pub tags             : Vec<String>,
    #[serde(default)]
    pub address          : Option<String>,
    #[serde(default)]
    pub media            : Vec<NewMedia>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewMedia {
    pub file_url: String,
    pub file_type: String,
}

/// Partial update of an event.
///
/// Omitted fields are left untouched. An explicit `null`
/// for `max_participants` removes the limit.
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title            : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description      : Option<String>,
    #[serde(default, with = "rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub event_date       : Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude         : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude        : Option<f64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type       : Option<EventType>,
    #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub max_participants : Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price            : Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address          : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags             : Option<Vec<String>>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct EventFilter {
    #[serde(default, rename = "type")]
    pub types: Vec<EventType>,
    /// Only the (UTC) calendar day is considered
    #[serde(default, with = "rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[serde(default)]
    pub tags: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Event {
    pub id                 : String,
    pub title              : String,
    pub description        : String,
    #[serde(with = "rfc3339")]
    pub event_date         : OffsetDateTime,
    pub latitude           : f64,
    pub longitude          : f64,
    #[serde(rename = "type")]
    pub event_type         : EventType,
    pub max_participants   : Option<u32>,
    pub price              : f64,
    pub address            : Option<String>,
    pub is_verified        : bool,
    pub is_active          : bool,
    pub creator_id         : String,
    pub creator            : Option<UserShort>,
    pub participants_count : u64,
    #[serde(with = "rfc3339")]
    pub created_at         : OffsetDateTime,
    #[serde(with = "rfc3339")]
    pub updated_at         : OffsetDateTime,
    pub tags               : Vec<Tag>,
    pub media              : Vec<Media>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Media {
    pub id: String,
    pub file_url: String,
    pub file_type: String,
    pub order_index: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    Going,
    Declined,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Participant {
    pub event_id: String,
    pub user_id: String,
    pub status: ParticipationStatus,
    #[serde(with = "rfc3339")]
    pub joined_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserShort>,
}

// ---   comments   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewComment {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateComment {
    pub content: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Vote {
    pub vote_type: VoteType,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Comment {
    pub id         : String,
    pub content    : String,
    pub event_id   : String,
    pub user_id    : String,
    pub parent_id  : Option<String>,
    pub score      : i64,
    pub is_deleted : bool,
    #[serde(with = "rfc3339")]
    pub created_at : OffsetDateTime,
    #[serde(with = "rfc3339")]
    pub updated_at : OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user       : Option<UserShort>,
    #[serde(default)]
    pub replies    : Vec<Comment>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VoteResult {
    pub comment_id: String,
    pub score: i64,
    /// The vote of the current user after toggling
    pub vote_type: Option<VoteType>,
}

// ---   notifications   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    EventCreated,
    EventVerified,
    EventRejected,
    EventDeleted,
    CommentAdded,
    CommentReply,
    Participation,
    System,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Notification {
    pub id                : String,
    pub user_id           : String,
    pub message           : String,
    #[serde(rename = "type")]
    pub notification_type : NotificationType,
    pub read              : bool,
    #[serde(with = "rfc3339")]
    pub created_at        : OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Count {
    pub count: u64,
}

// ---   administration   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RejectEvent {
    pub reason: String,
}

/// Optional justification of a moderation action.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ModerationReason {
    #[serde(default)]
    pub reason: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Statistics {
    pub total_users         : u64,
    pub total_events        : u64,
    pub active_events       : u64,
    pub verified_events     : u64,
    pub total_comments      : u64,
    pub today_registrations : u64,
    pub online_users        : u64,
    pub top_events          : Vec<TopEvent>,
    pub pending_events      : Vec<Event>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TopEvent {
    pub event_id: String,
    pub title: String,
    pub participants: u64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AdminAction {
    pub id           : String,
    pub admin_id     : String,
    pub action_type  : String,
    pub target_id    : String,
    pub target_type  : String,
    pub reason       : Option<String>,
    #[serde(with = "rfc3339")]
    pub performed_at : OffsetDateTime,
}

// ---   errors   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the response
    pub http_status: u16,
    pub message: String,
}
