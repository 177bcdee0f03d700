use std::{
    collections::HashSet,
    sync::{mpsc, Arc},
    thread,
};

use eventhub_core::{
    entities::{Notification, Timestamp},
    gateways::notify::{NotificationEvent, NotificationGateway, NotificationStore, NotificationType},
};
use serde::Deserialize;
use strum::EnumString;

/// Where notifications are written to the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DispatchMode {
    /// On the calling thread, right after the state change was committed.
    Inline,
    /// On a dedicated worker thread.
    #[default]
    Background,
}

type Store = Arc<dyn NotificationStore + Send + Sync + 'static>;

#[derive(Clone)]
pub struct Notify {
    dispatcher: Arc<Dispatcher>,
    notify_on: HashSet<NotificationType>,
}

enum Dispatcher {
    Inline(Store),
    Background(Worker),
}

struct Worker {
    tx: Option<mpsc::Sender<Vec<Notification>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn spawn(store: Store) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel::<Vec<Notification>>();
        let handle = thread::Builder::new()
            .name("notifications".into())
            .spawn(move || {
                log::debug!("Notification worker started");
                for notifications in rx {
                    store_notifications(&*store, &notifications);
                }
                log::debug!("Notification worker stopped");
            })?;
        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    fn send(&self, notifications: Vec<Notification>) {
        let Some(tx) = &self.tx else {
            return;
        };
        if let Err(mpsc::SendError(notifications)) = tx.send(notifications) {
            log::error!(
                "Notification worker is gone: {} notification(s) dropped",
                notifications.len()
            );
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain pending messages and exit
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Notification worker panicked");
            }
        }
    }
}

fn store_notifications(store: &(dyn NotificationStore + Send + Sync), notifications: &[Notification]) {
    if let Err(err) = store.store_notifications(notifications) {
        log::warn!(
            "Failed to store {} notification(s): {err}",
            notifications.len()
        );
    }
}

impl Notify {
    pub fn new<S>(
        store: S,
        notify_on: HashSet<NotificationType>,
        mode: DispatchMode,
    ) -> anyhow::Result<Self>
    where
        S: NotificationStore + Send + Sync + 'static,
    {
        let store: Store = Arc::new(store);
        let dispatcher = match mode {
            DispatchMode::Inline => Dispatcher::Inline(store),
            DispatchMode::Background => Dispatcher::Background(Worker::spawn(store)?),
        };
        Ok(Self {
            dispatcher: Arc::new(dispatcher),
            notify_on,
        })
    }

    fn skip(&self, notification: &Notification) -> bool {
        !self.notify_on.contains(&notification.notification_type)
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        let notifications: Vec<_> = event
            .into_notifications(Timestamp::now())
            .into_iter()
            .filter(|n| !self.skip(n))
            .collect();
        if notifications.is_empty() {
            return;
        }
        log::debug!("Dispatching {} notification(s)", notifications.len());
        match &*self.dispatcher {
            Dispatcher::Inline(store) => store_notifications(&**store, &notifications),
            Dispatcher::Background(worker) => worker.send(notifications),
        }
    }
}
