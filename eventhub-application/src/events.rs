use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    account_id: &str,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    let (event, notification) = connections.exclusive()?.transaction(|conn| {
        usecases::create_event(conn, account_id, new_event).map_err(|err| {
            warn!("Failed to create new event: {err}");
            err
        })
    })?;
    info!("Created new event {}", event.id);
    notify.notify(notification);
    Ok(event)
}

pub fn update_event(
    connections: &sqlite::Connections,
    account_id: &str,
    event_id: &str,
    update: usecases::UpdateEvent,
) -> Result<Event> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_event(conn, account_id, event_id, update))?)
}

pub fn delete_event(
    connections: &sqlite::Connections,
    account_id: &str,
    event_id: &str,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_event(conn, account_id, event_id))?;
    info!("Event {event_id} deleted by its creator");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn notify_admins_about_new_events() {
        let fixture = BackendFixture::new();
        let admin = fixture.register("admin", Role::Admin);
        let creator = fixture.register("creator", Role::User);
        let event = fixture.create_event(creator.id.as_str(), "Jam session", None);
        assert_eq!(EventStatus::Pending, event.status);
        assert_eq!(vec!["jazz".to_string()], event.tags.iter().map(|t| t.slug.clone()).collect::<Vec<_>>());

        let notifications = fixture.notifications_of(admin.id.as_str());
        assert_eq!(1, notifications.len());
        assert_eq!(NotificationType::EventCreated, notifications[0].notification_type);
        assert!(notifications[0].message.contains("Jam session"));
        assert!(fixture.notifications_of(creator.id.as_str()).is_empty());
    }

    #[test]
    fn update_and_delete_own_event() {
        let fixture = BackendFixture::new();
        let creator = fixture.register("creator", Role::User);
        let other = fixture.register("other", Role::User);
        let event = fixture.create_event(creator.id.as_str(), "Jam session", None);

        let update = usecases::UpdateEvent {
            title: Some("Late jam session".into()),
            max_participants: Some(Some(5)),
            tags: Some(vec!["Blues".into()]),
            ..Default::default()
        };
        let err = flows::update_event(
            &fixture.db_connections,
            other.id.as_str(),
            event.id.as_str(),
            update.clone(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Forbidden))
        ));

        let updated = flows::update_event(
            &fixture.db_connections,
            creator.id.as_str(),
            event.id.as_str(),
            update,
        )
        .unwrap();
        assert_eq!("Late jam session", updated.title);
        assert_eq!(updated, fixture.event(event.id.as_str()));
        assert_eq!("blues", updated.tags[0].slug);

        flows::delete_event(&fixture.db_connections, creator.id.as_str(), event.id.as_str())
            .unwrap();
        assert_eq!(EventStatus::Removed, fixture.event(event.id.as_str()).status);
        let err = flows::delete_event(&fixture.db_connections, creator.id.as_str(), event.id.as_str())
            .unwrap_err();
        assert!(matches!(err, AppError::Business(BError::Repo(RepoError::NotFound))));
    }
}
