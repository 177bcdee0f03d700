use duration_str::deserialize_duration;
use eventhub_gateways::notify::DispatchMode;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("eventhub.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub statistics: Option<Statistics>,
    pub notifications: Option<Notifications>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

// Fallbacks for fields that are missing in a section.
// They must match the values of the default configuration file.

fn default_connection_sqlite() -> String {
    "eventhub.db".to_string()
}

const fn default_connection_pool_size() -> u32 {
    10
}

const fn default_token_validity() -> Duration {
    Duration::from_secs(24 * 60 * 60)
}

const fn default_online_window() -> Duration {
    Duration::from_secs(15 * 60)
}

const fn default_top_events_limit() -> usize {
    10
}

fn default_notify_on() -> Vec<String> {
    [
        "event_created",
        "event_verified",
        "event_rejected",
        "event_deleted",
        "participation",
        "comment_added",
        "comment_reply",
        "system",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    #[serde(default = "default_connection_sqlite")]
    pub connection_sqlite: String,
    #[serde(default = "default_connection_pool_size")]
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Self {
            connection_sqlite: default_connection_sqlite(),
            connection_pool_size: default_connection_pool_size(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    #[serde(default)]
    pub cors: bool,
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(
        default = "default_token_validity",
        deserialize_with = "deserialize_duration"
    )]
    pub token_validity: Duration,
}

impl Default for WebServer {
    fn default() -> Self {
        Self {
            cors: false,
            jwt_secret: String::new(),
            token_validity: default_token_validity(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Statistics {
    #[serde(
        default = "default_online_window",
        deserialize_with = "deserialize_duration"
    )]
    pub online_window: Duration,
    #[serde(default = "default_top_events_limit")]
    pub top_events_limit: usize,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            online_window: default_online_window(),
            top_events_limit: default_top_events_limit(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notifications {
    #[serde(default)]
    pub dispatch: DispatchMode,
    #[serde(default = "default_notify_on")]
    pub notify_on: Vec<String>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            dispatch: DispatchMode::default(),
            notify_on: default_notify_on(),
        }
    }
}
