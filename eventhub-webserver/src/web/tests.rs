use std::collections::HashSet;

use eventhub_db_sqlite::Connections;
use eventhub_gateways::notify::{DispatchMode, Notify};
use rocket::{config::Config as RocketCfg, local::blocking::Client};
use strum::IntoEnumIterator;

use crate::{core::entities::NotificationType, web::Cfg};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::rocket_test_setup;
    pub use crate::core::prelude::*;
}

/// A client for an API backed by an in-memory database
/// that stores all notifications immediately.
pub fn rocket_test_setup() -> (Client, Connections) {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = Connections::init(":memory:", 1).unwrap();
    eventhub_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let notify_on: HashSet<_> = NotificationType::iter().collect();
    let notify = Notify::new(connections.clone(), notify_on, DispatchMode::Inline).unwrap();
    let options = super::InstanceOptions {
        mounts: super::mounts(),
        catchers: super::catchers(),
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: Cfg {
            jwt_secret: Some("test-secret".into()),
            ..Default::default()
        },
    };
    let rocket = super::rocket_instance(options, connections.clone(), Box::new(notify));
    let client = Client::tracked(rocket).unwrap();
    (client, connections)
}
