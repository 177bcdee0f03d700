use eventhub_core::{gateways::notify::NotificationGateway, usecases::StatisticsParams};
use eventhub_db_sqlite::Connections;
use rocket::{config::Config as RocketCfg, Catcher, Rocket, Route};
use time::Duration;

pub mod api;
mod guards;
pub mod jwt;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Tokens are signed with a random secret if missing
    pub jwt_secret: Option<String>,
    pub token_validity: Duration,
    pub statistics: StatisticsParams,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_validity: Duration::days(1),
            statistics: StatisticsParams::default(),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    catchers: Vec<(&'static str, Vec<Catcher>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        catchers,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = match &cfg.jwt_secret {
        Some(secret) => jwt::JwtState::new(secret, cfg.token_validity),
        None => {
            warn!("No JWT secret configured: tokens become invalid after a restart");
            jwt::JwtState::random(cfg.token_validity)
        }
    };

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(connections)
        .manage(jwt_state)
        .manage(guards::Notify(notify))
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    for (m, c) in catchers {
        instance = instance.register(m, c);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

fn catchers() -> Vec<(&'static str, Vec<Catcher>)> {
    vec![("/", api::catchers())]
}

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        catchers: catchers(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, connections, notify);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    info!("Starting web server");
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
