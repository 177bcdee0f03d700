#[macro_use]
extern crate log;

use eventhub_core::gateways::notify::NotificationGateway;
use eventhub_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
) {
    web::run(connections, enable_cors, cfg, notify_gw).await;
}
