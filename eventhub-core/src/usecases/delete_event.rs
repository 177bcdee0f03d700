use super::{load_active_event, prelude::*};

/// Remove an event on behalf of its creator.
///
/// The event is only marked as removed and stays in the store.
pub fn delete_event<R>(repo: &R, account_id: &str, event_id: &str) -> Result<()>
where
    R: UserRepo + EventRepo,
{
    let account = super::authorize_account(repo, account_id)?;
    let mut event = load_active_event(repo, event_id)?;
    super::authorize_owner(&account, &event)?;
    event.status = EventStatus::Removed;
    event.updated_at = Timestamp::now();
    log::debug!("Removing event {} on behalf of its creator", event.id);
    repo.update_event(&event)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use eventhub_entities::builders::*;

    #[test]
    fn creator_removes_own_event() {
        let db = MockDb::default();
        let owner = db.add_user(User::build().finish());
        let event = db.add_event(Event::build().creator(owner.id.as_str()).finish());
        delete_event(&db, owner.id.as_str(), event.id.as_str()).unwrap();
        assert_eq!(
            EventStatus::Removed,
            db.get_event(event.id.as_str()).unwrap().status
        );
        assert!(matches!(
            delete_event(&db, owner.id.as_str(), event.id.as_str()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn others_cannot_remove_the_event() {
        let db = MockDb::default();
        let owner = db.add_user(User::build().finish());
        let other = db.add_user(User::build().finish());
        let event = db.add_event(Event::build().creator(owner.id.as_str()).finish());
        assert!(matches!(
            delete_event(&db, other.id.as_str(), event.id.as_str()),
            Err(Error::Forbidden)
        ));
        assert!(db.get_event(event.id.as_str()).unwrap().is_active());
    }
}
