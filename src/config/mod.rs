use anyhow::{anyhow, Result};
use eventhub_core::{entities::NotificationType, usecases::StatisticsParams};
use eventhub_gateways::notify::DispatchMode;
use std::{collections::HashSet, env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "eventhub.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub statistics: StatisticsParams,
    pub notifications: Notifications,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            cfg.webserver.jwt_secret = non_empty(secret);
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct WebServer {
    pub enable_cors: bool,
    pub jwt_secret: Option<String>,
    pub token_validity: time::Duration,
}

#[derive(Debug)]
pub struct Notifications {
    pub dispatch: DispatchMode,
    pub notify_on: HashSet<NotificationType>,
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

fn duration(from: std::time::Duration, what: &str) -> Result<time::Duration> {
    time::Duration::try_from(from).map_err(|_| anyhow!("The {what} is out of range"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            statistics,
            notifications,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            jwt_secret,
            token_validity,
        } = webserver.unwrap_or_default();
        let token_validity = duration(token_validity, "token validity")?;
        if token_validity.is_zero() {
            return Err(anyhow!("Tokens must be valid for some time"));
        }
        let webserver = WebServer {
            enable_cors: cors,
            jwt_secret: non_empty(jwt_secret),
            token_validity,
        };

        let raw::Statistics {
            online_window,
            top_events_limit,
        } = statistics.unwrap_or_default();
        let statistics = StatisticsParams {
            online_window: duration(online_window, "online window")?,
            top_events_limit,
        };

        let raw::Notifications {
            dispatch,
            notify_on,
        } = notifications.unwrap_or_default();
        let notify_on = notify_on
            .iter()
            .map(|t| {
                t.parse::<NotificationType>()
                    .map_err(|_| anyhow!("Unknown notification type '{t}'"))
            })
            .collect::<Result<HashSet<_>>>()?;
        if notify_on.is_empty() {
            log::warn!("All notifications are disabled");
        }
        let notifications = Notifications {
            dispatch,
            notify_on,
        };

        Ok(Self {
            db,
            webserver,
            statistics,
            notifications,
        })
    }
}
