#[macro_use]
extern crate log;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eventhub_db_sqlite::{run_embedded_database_migrations, Connections};
use eventhub_gateways::notify::Notify;

mod config;

use config::Config;

#[derive(Parser)]
#[command(version, about = "REST backend for community events")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL of the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let Config {
        db,
        webserver,
        statistics,
        notifications,
    } = cfg;

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite, db.conn_pool_size
    );
    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    let notify_gw = Notify::new(
        connections.clone(),
        notifications.notify_on,
        notifications.dispatch,
    )?;

    let web_cfg = eventhub_webserver::Cfg {
        jwt_secret: webserver.jwt_secret,
        token_validity: webserver.token_validity,
        statistics,
    };
    let enable_cors = args.enable_cors || webserver.enable_cors;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(eventhub_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        Box::new(notify_gw),
    ));
    Ok(())
}
