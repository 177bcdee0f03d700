use super::json;
use crate::web::tests::prelude::*;

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

fn parse<T: serde::de::DeserializeOwned>(res: LocalResponse) -> T {
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

fn register(client: &Client, username: &str, role: &str) -> json::AuthResponse {
    let res = client
        .post("/api/register")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"username":"{username}","email":"{username}@example.com","password":"secret123","role":"{role}"}}"#
        ))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    parse(res)
}

fn create_event(client: &Client, token: &str, max_participants: Option<u32>) -> json::Event {
    let max_participants = max_participants.map_or("null".to_owned(), |max| max.to_string());
    let res = client
        .post("/api/events")
        .header(ContentType::JSON)
        .header(bearer(token))
        .body(format!(
            r#"{{
                "title": "Jazz night",
                "description": "Live music",
                "event_date": "2024-06-01T18:00:00Z",
                "latitude": 52.52,
                "longitude": 13.405,
                "type": "concert",
                "max_participants": {max_participants},
                "tags": ["Jazz", "Open Air"],
                "media": [{{"file_url": "/uploads/poster.png", "file_type": "image/png"}}]
            }}"#
        ))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    parse(res)
}

#[test]
fn register_login_and_get_profile() {
    let (client, _) = rocket_test_setup();
    let auth = register(&client, "alice", "user");
    assert_eq!("alice", auth.user.username);
    assert_eq!(json::UserRole::User, auth.user.role);

    let res = client
        .post("/api/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"alice@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let login: json::AuthResponse = parse(res);
    assert!(login.user.last_online.is_some());

    let res = client
        .get("/api/profile")
        .header(bearer(&login.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let profile: json::User = parse(res);
    assert_eq!(auth.user.id, profile.id);
    assert!(!profile.is_blocked);
}

#[test]
fn reject_invalid_credentials_and_duplicates() {
    let (client, _) = rocket_test_setup();
    register(&client, "alice", "user");

    let res = client
        .post("/api/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"alice@example.com","password":"wrong-password"}"#)
        .dispatch();
    assert_eq!(Status::Unauthorized, res.status());
    let err: json::Error = parse(res);
    assert_eq!(401, err.http_status);

    let res = client
        .post("/api/register")
        .header(ContentType::JSON)
        .body(r#"{"username":"alice","email":"other@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(Status::Conflict, res.status());
}

#[test]
fn require_a_valid_token() {
    let (client, _) = rocket_test_setup();
    let res = client.get("/api/profile").dispatch();
    assert_eq!(Status::Unauthorized, res.status());
    let err: json::Error = parse(res);
    assert_eq!(401, err.http_status);

    let res = client
        .get("/api/events")
        .header(bearer("not-a-token"))
        .dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}

#[test]
fn reject_malformed_json() {
    let (client, _) = rocket_test_setup();
    let auth = register(&client, "alice", "user");
    let res = client
        .post("/api/events")
        .header(ContentType::JSON)
        .header(bearer(&auth.token))
        .body(r#"{"title":"Jazz night"}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
}

#[test]
fn create_and_filter_events() {
    let (client, _) = rocket_test_setup();
    let auth = register(&client, "alice", "user");
    let event = create_event(&client, &auth.token, Some(10));
    assert!(event.is_active);
    assert!(!event.is_verified);
    assert_eq!(0, event.participants_count);
    assert_eq!(Some("alice"), event.creator.as_ref().map(|c| c.username.as_str()));
    assert_eq!(vec!["Jazz", "Open Air"], event.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>());
    assert_eq!(1, event.media.len());

    let res = client
        .post("/api/events/filter")
        .header(ContentType::JSON)
        .header(bearer(&auth.token))
        .body(r#"{"type":["concert"],"date":"2024-06-01T00:00:00Z","tags":"open-air"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let events: Vec<json::Event> = parse(res);
    assert_eq!(1, events.len());

    let res = client
        .post("/api/events/filter")
        .header(ContentType::JSON)
        .header(bearer(&auth.token))
        .body(r#"{"type":["workshop"]}"#)
        .dispatch();
    let events: Vec<json::Event> = parse(res);
    assert!(events.is_empty());

    let res = client
        .get(format!("/api/events/{}", event.id))
        .header(bearer(&auth.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
}

#[test]
fn only_the_creator_may_update_or_delete_an_event() {
    let (client, _) = rocket_test_setup();
    let alice = register(&client, "alice", "user");
    let bob = register(&client, "bob", "user");
    let event = create_event(&client, &alice.token, None);
    let uri = format!("/api/events/{}", event.id);

    let res = client
        .put(uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&bob.token))
        .body(r#"{"title":"Hijacked"}"#)
        .dispatch();
    assert_eq!(Status::Forbidden, res.status());

    let res = client
        .put(uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&alice.token))
        .body(r#"{"title":"Blues night","max_participants":2}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let updated: json::Event = parse(res);
    assert_eq!("Blues night", updated.title);
    assert_eq!(Some(2), updated.max_participants);

    let res = client.delete(uri.as_str()).header(bearer(&bob.token)).dispatch();
    assert_eq!(Status::Forbidden, res.status());
    let res = client.delete(uri.as_str()).header(bearer(&alice.token)).dispatch();
    assert_eq!(Status::Ok, res.status());
    let res = client.get(uri.as_str()).header(bearer(&alice.token)).dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn join_a_fully_booked_event() {
    let (client, _) = rocket_test_setup();
    let creator = register(&client, "carol", "user");
    let alice = register(&client, "alice", "user");
    let bob = register(&client, "bob", "user");
    let event = create_event(&client, &creator.token, Some(1));
    let uri = format!("/api/events/{}/participate", event.id);

    let res = client.post(uri.as_str()).header(bearer(&alice.token)).dispatch();
    assert_eq!(Status::Ok, res.status());
    let participant: json::Participant = parse(res);
    assert_eq!(json::ParticipationStatus::Going, participant.status);

    let res = client.post(uri.as_str()).header(bearer(&alice.token)).dispatch();
    assert_eq!(Status::Conflict, res.status());
    let res = client.post(uri.as_str()).header(bearer(&bob.token)).dispatch();
    assert_eq!(Status::Conflict, res.status());

    let res = client.delete(uri.as_str()).header(bearer(&alice.token)).dispatch();
    assert_eq!(Status::Ok, res.status());
    let res = client.post(uri.as_str()).header(bearer(&bob.token)).dispatch();
    assert_eq!(Status::Ok, res.status());

    let res = client
        .get(format!("/api/events/{}/participants", event.id))
        .header(bearer(&alice.token))
        .dispatch();
    let participants: Vec<json::Participant> = parse(res);
    assert_eq!(1, participants.len());
    assert_eq!(
        Some("bob"),
        participants[0].user.as_ref().map(|u| u.username.as_str())
    );

    let res = client
        .get("/api/user/participated")
        .header(bearer(&bob.token))
        .dispatch();
    let events: Vec<json::Event> = parse(res);
    assert_eq!(1, events.len());
    assert_eq!(1, events[0].participants_count);

    // The creator has been notified about both participants
    let res = client
        .get("/api/notifications/unread-count")
        .header(bearer(&creator.token))
        .dispatch();
    let unread: json::Count = parse(res);
    assert_eq!(2, unread.count);
}

#[test]
fn comment_reply_and_vote() {
    let (client, _) = rocket_test_setup();
    let creator = register(&client, "carol", "user");
    let alice = register(&client, "alice", "user");
    let bob = register(&client, "bob", "user");
    let event = create_event(&client, &creator.token, None);
    let uri = format!("/api/events/{}/comments", event.id);

    let res = client
        .post(uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&alice.token))
        .body(r#"{"content":"Looking forward!"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let comment: json::Comment = parse(res);
    assert_eq!(0, comment.score);

    let res = client
        .post(uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&bob.token))
        .body(format!(r#"{{"content":"Me too","parent_id":"{}"}}"#, comment.id))
        .dispatch();
    assert_eq!(Status::Ok, res.status());

    let vote_uri = format!("/api/comments/{}/vote", comment.id);
    let res = client
        .post(vote_uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&bob.token))
        .body(r#"{"vote_type":"upvote"}"#)
        .dispatch();
    let vote: json::VoteResult = parse(res);
    assert_eq!(1, vote.score);
    assert_eq!(Some(json::VoteType::Upvote), vote.vote_type);

    let res = client
        .post(vote_uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&bob.token))
        .body(r#"{"vote_type":"upvote"}"#)
        .dispatch();
    let vote: json::VoteResult = parse(res);
    assert_eq!(0, vote.score);
    assert_eq!(None, vote.vote_type);

    let res = client.get(uri.as_str()).header(bearer(&alice.token)).dispatch();
    let threads: Vec<json::Comment> = parse(res);
    assert_eq!(1, threads.len());
    assert_eq!(1, threads[0].replies.len());
    assert_eq!("Me too", threads[0].replies[0].content);

    // The replier is not allowed to edit the comment of someone else
    let res = client
        .put(format!("/api/comments/{}", comment.id))
        .header(ContentType::JSON)
        .header(bearer(&bob.token))
        .body(r#"{"content":"Edited"}"#)
        .dispatch();
    assert_eq!(Status::Forbidden, res.status());

    // The creator of the event got two notifications and the
    // author of the parent comment one
    let res = client
        .get("/api/notifications")
        .header(bearer(&alice.token))
        .dispatch();
    let notifications: Vec<json::Notification> = parse(res);
    assert_eq!(1, notifications.len());
    assert_eq!(json::NotificationType::CommentReply, notifications[0].notification_type);
    let res = client
        .get("/api/notifications/unread-count")
        .header(bearer(&creator.token))
        .dispatch();
    let unread: json::Count = parse(res);
    assert_eq!(2, unread.count);
}

#[test]
fn moderate_events_and_users() {
    let (client, _) = rocket_test_setup();
    let admin = register(&client, "admin", "admin");
    let alice = register(&client, "alice", "user");
    let event = create_event(&client, &alice.token, None);
    let spam = create_event(&client, &alice.token, None);

    // Users cannot moderate
    let res = client
        .put(format!("/api/admin/events/{}/verify", event.id))
        .header(bearer(&alice.token))
        .dispatch();
    assert_eq!(Status::Forbidden, res.status());

    let res = client
        .put(format!("/api/admin/events/{}/verify", event.id))
        .header(bearer(&admin.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let verified: json::Event = parse(res);
    assert!(verified.is_verified);

    let res = client
        .put(format!("/api/admin/events/{}/verify", event.id))
        .header(bearer(&admin.token))
        .dispatch();
    assert_eq!(Status::Conflict, res.status());

    let res = client
        .put(format!("/api/admin/events/{}/reject", spam.id))
        .header(ContentType::JSON)
        .header(bearer(&admin.token))
        .body(r#"{"reason":"spam"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let rejected: json::Event = parse(res);
    assert!(!rejected.is_active);

    let res = client
        .get("/api/notifications")
        .header(bearer(&alice.token))
        .dispatch();
    let notifications: Vec<json::Notification> = parse(res);
    assert_eq!(2, notifications.len());
    let rejection = notifications
        .iter()
        .find(|n| n.notification_type == json::NotificationType::EventRejected)
        .unwrap();
    assert!(rejection.message.contains("spam"));

    let block_uri = format!("/api/admin/users/{}/block", alice.user.id);
    let res = client
        .put(block_uri.as_str())
        .header(ContentType::JSON)
        .header(bearer(&admin.token))
        .body(r#"{"reason":"spam"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let blocked: json::User = parse(res);
    assert!(blocked.is_blocked);
    let res = client.put(block_uri.as_str()).header(bearer(&admin.token)).dispatch();
    assert_eq!(Status::Conflict, res.status());

    // Blocked users are still authenticated but cannot change anything
    let res = client
        .get("/api/profile")
        .header(bearer(&alice.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let res = client
        .post(format!("/api/events/{}/participate", event.id))
        .header(bearer(&alice.token))
        .dispatch();
    assert_eq!(Status::Forbidden, res.status());

    let res = client
        .put(format!("/api/admin/users/{}/unblock", alice.user.id))
        .header(bearer(&admin.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());

    let res = client
        .get("/api/admin/actions")
        .header(bearer(&admin.token))
        .dispatch();
    let actions: Vec<json::AdminAction> = parse(res);
    let mut action_types: Vec<_> = actions.iter().map(|a| a.action_type.as_str()).collect();
    action_types.sort_unstable();
    assert_eq!(
        vec!["block_user", "reject_event", "unblock_user", "verify_event"],
        action_types
    );
}

#[test]
fn admin_statistics() {
    let (client, _) = rocket_test_setup();
    let admin = register(&client, "admin", "admin");
    let alice = register(&client, "alice", "user");
    let event = create_event(&client, &alice.token, None);
    create_event(&client, &alice.token, None);
    client
        .post(format!("/api/events/{}/participate", event.id))
        .header(bearer(&admin.token))
        .dispatch();

    let res = client
        .get("/api/admin/statistics")
        .header(bearer(&alice.token))
        .dispatch();
    assert_eq!(Status::Forbidden, res.status());

    let res = client
        .get("/api/admin/statistics")
        .header(bearer(&admin.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let statistics: json::Statistics = parse(res);
    assert_eq!(2, statistics.total_users);
    assert_eq!(2, statistics.today_registrations);
    assert_eq!(2, statistics.online_users);
    assert_eq!(2, statistics.total_events);
    assert_eq!(2, statistics.active_events);
    assert_eq!(0, statistics.verified_events);
    assert_eq!(2, statistics.pending_events.len());
    assert_eq!(event.id, statistics.top_events[0].event_id);
    assert_eq!(1, statistics.top_events[0].participants);
}

#[test]
fn mark_notifications_as_read() {
    let (client, _) = rocket_test_setup();
    let admin = register(&client, "admin", "admin");
    let alice = register(&client, "alice", "user");
    create_event(&client, &alice.token, None);
    create_event(&client, &alice.token, None);

    let res = client
        .get("/api/notifications")
        .header(bearer(&admin.token))
        .dispatch();
    let notifications: Vec<json::Notification> = parse(res);
    assert_eq!(2, notifications.len());
    assert!(notifications
        .iter()
        .all(|n| n.notification_type == json::NotificationType::EventCreated));

    let res = client
        .put(format!("/api/notifications/{}/read", notifications[0].id))
        .header(bearer(&alice.token))
        .dispatch();
    assert_eq!(Status::NotFound, res.status());

    let res = client
        .put(format!("/api/notifications/{}/read", notifications[0].id))
        .header(bearer(&admin.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());

    let res = client
        .post("/api/notifications/mark-all-read")
        .header(bearer(&admin.token))
        .dispatch();
    let marked: json::Count = parse(res);
    assert_eq!(1, marked.count);
}

#[test]
fn summarize_own_activity_on_the_dashboard() {
    let (client, _) = rocket_test_setup();
    let alice = register(&client, "alice", "user");
    let bob = register(&client, "bob", "user");
    let event = create_event(&client, &alice.token, None);
    create_event(&client, &alice.token, None);
    client
        .post(format!("/api/events/{}/participate", event.id))
        .header(bearer(&alice.token))
        .dispatch();

    let res = client
        .post(format!("/api/events/{}/comments", event.id))
        .header(ContentType::JSON)
        .header(bearer(&alice.token))
        .body(r#"{"content":"See you there"}"#)
        .dispatch();
    let comment: json::Comment = parse(res);
    client
        .post(format!("/api/comments/{}/vote", comment.id))
        .header(ContentType::JSON)
        .header(bearer(&bob.token))
        .body(r#"{"vote_type":"upvote"}"#)
        .dispatch();

    let res = client
        .get("/api/user/dashboard")
        .header(bearer(&alice.token))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let dashboard: json::Dashboard = parse(res);
    assert_eq!(
        json::Dashboard {
            created_events: 2,
            participated_events: 1,
            comments: 1,
            rating: 1,
        },
        dashboard
    );

    let res = client.get("/api/user/dashboard").dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}
