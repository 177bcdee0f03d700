#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: i16,
    pub avatar_url: Option<&'a str>,
    pub status: i16,
    pub last_online: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub avatar_url: Option<String>,
    pub status: i16,
    pub last_online: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = events)]
#[diesel(treat_none_as_null = true)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub event_date: i64,
    pub lat: f64,
    pub lon: f64,
    pub event_type: &'a str,
    pub max_participants: Option<i64>,
    pub price: f64,
    pub address: Option<&'a str>,
    pub status: i16,
    pub creator_id: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_date: i64,
    pub lat: f64,
    pub lon: f64,
    pub event_type: String,
    pub max_participants: Option<i64>,
    pub price: f64,
    pub address: Option<String>,
    pub status: i16,
    pub creator_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = event_media)]
pub struct EventMedia {
    pub id: String,
    pub event_id: String,
    pub file_url: String,
    pub file_type: String,
    pub order_index: i32,
}

#[derive(Insertable)]
#[diesel(table_name = event_tags)]
pub struct NewEventTag<'a> {
    pub event_id: &'a str,
    pub tag_id: &'a str,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = event_participants)]
pub struct EventParticipant {
    pub event_id: String,
    pub user_id: String,
    pub status: i16,
    pub joined_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = tags)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = comments)]
#[diesel(treat_none_as_null = true)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub event_id: &'a str,
    pub user_id: &'a str,
    pub parent_id: Option<&'a str>,
    pub content: &'a str,
    pub score: i64,
    pub status: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub parent_id: Option<String>,
    pub content: String,
    pub score: i64,
    pub status: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = comment_votes)]
pub struct CommentVote {
    pub comment_id: String,
    pub user_id: String,
    pub vote_type: i16,
    pub voted_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = notifications)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = admin_actions)]
pub struct AdminAction {
    pub id: String,
    pub admin_id: String,
    pub action_type: String,
    pub target_id: String,
    pub target_type: String,
    pub reason: Option<String>,
    pub performed_at: i64,
}
