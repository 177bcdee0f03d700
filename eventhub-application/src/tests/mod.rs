pub mod prelude {

    use std::collections::HashSet;

    pub use eventhub_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    use eventhub_gateways::notify::{DispatchMode, Notify};
    use strum::IntoEnumIterator;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: Notify,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            eventhub_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            let notify_on: HashSet<_> = NotificationType::iter().collect();
            let notify = Notify::new(db_connections.clone(), notify_on, DispatchMode::Inline).unwrap();
            Self {
                db_connections,
                notify,
            }
        }

        pub fn register(&self, username: &str, role: Role) -> User {
            flows::register_user(
                &self.db_connections,
                usecases::NewUser {
                    username: username.into(),
                    email: format!("{username}@example.com"),
                    password: "secret123".into(),
                    role: Some(role.to_string()),
                },
            )
            .unwrap()
        }

        pub fn create_event(&self, account_id: &str, title: &str, max_participants: Option<u32>) -> Event {
            flows::create_event(
                &self.db_connections,
                &self.notify,
                account_id,
                usecases::NewEvent {
                    title: title.into(),
                    description: "Bring your instruments".into(),
                    event_date: Timestamp::now(),
                    location: Location::new(52.52, 13.405),
                    event_type: EventType::Concert,
                    max_participants,
                    price: 0.0,
                    address: None,
                    tags: vec!["Jazz".into()],
                    media: vec![],
                },
            )
            .unwrap()
        }

        pub fn join(&self, account_id: &str, event_id: &str) -> Result<Participant, AppError> {
            flows::join_event(&self.db_connections, &self.notify, account_id, event_id)
        }

        pub fn user(&self, id: &str) -> User {
            self.db_connections.shared().unwrap().get_user(id).unwrap()
        }

        pub fn event(&self, id: &str) -> Event {
            self.db_connections.shared().unwrap().get_event(id).unwrap()
        }

        pub fn comment(&self, id: &str) -> Comment {
            self.db_connections.shared().unwrap().get_comment(id).unwrap()
        }

        pub fn notifications_of(&self, user_id: &str) -> Vec<Notification> {
            let db = self.db_connections.shared().unwrap();
            usecases::notifications_of_user(&db, user_id).unwrap()
        }

        pub fn unread_count(&self, user_id: &str) -> usize {
            let db = self.db_connections.shared().unwrap();
            usecases::count_unread_notifications(&db, user_id).unwrap()
        }
    }
}

use self::prelude::*;

#[test]
fn statistics_reflect_the_current_state() {
    let fixture = BackendFixture::new();
    let admin = fixture.register("admin", Role::Admin);
    let creator = fixture.register("creator", Role::User);
    let alice = fixture.register("alice", Role::User);
    let popular = fixture.create_event(creator.id.as_str(), "Jam session", None);
    let quiet = fixture.create_event(creator.id.as_str(), "Open stage", None);
    let removed = fixture.create_event(creator.id.as_str(), "Cancelled", None);
    fixture.join(alice.id.as_str(), popular.id.as_str()).unwrap();
    fixture.join(creator.id.as_str(), popular.id.as_str()).unwrap();
    flows::verify_event(
        &fixture.db_connections,
        &fixture.notify,
        admin.id.as_str(),
        quiet.id.as_str(),
    )
    .unwrap();
    flows::delete_event(&fixture.db_connections, creator.id.as_str(), removed.id.as_str())
        .unwrap();
    flows::login(
        &fixture.db_connections,
        &usecases::Credentials {
            email: "alice@example.com",
            password: "secret123",
        },
    )
    .unwrap();

    let stats = {
        let db = fixture.db_connections.shared().unwrap();
        usecases::statistics(
            &db,
            admin.id.as_str(),
            Timestamp::now(),
            usecases::StatisticsParams::default(),
        )
        .unwrap()
    };
    assert_eq!(3, stats.total_users);
    assert_eq!(3, stats.total_events);
    assert_eq!(2, stats.active_events);
    assert_eq!(1, stats.verified_events);
    assert_eq!(0, stats.total_comments);
    assert_eq!(1, stats.online_users);
    assert_eq!(2, stats.top_events.len());
    assert_eq!(popular.id, stats.top_events[0].event.id);
    assert_eq!(2, stats.top_events[0].participants);
    assert_eq!(
        vec![popular.id],
        stats
            .pending_events
            .into_iter()
            .map(|e| e.id)
            .collect::<Vec<_>>()
    );
}
