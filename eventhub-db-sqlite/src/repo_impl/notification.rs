use super::*;

impl NotificationRepo for DbReadOnly<'_> {
    fn create_notification(&self, _notification: &Notification) -> Result<()> {
        unreachable!();
    }
    fn notifications_of_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        notifications_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn mark_notification_as_read(&self, _user_id: &str, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn mark_all_notifications_as_read(&self, _user_id: &str) -> Result<usize> {
        unreachable!();
    }
    fn count_unread_notifications(&self, user_id: &str) -> Result<usize> {
        count_unread_notifications(&mut self.conn.borrow_mut(), user_id)
    }
}

impl NotificationRepo for DbReadWrite<'_> {
    fn create_notification(&self, notification: &Notification) -> Result<()> {
        create_notification(&mut self.conn.borrow_mut(), notification)
    }
    fn notifications_of_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        notifications_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn mark_notification_as_read(&self, user_id: &str, id: &str) -> Result<()> {
        mark_notification_as_read(&mut self.conn.borrow_mut(), user_id, id)
    }
    fn mark_all_notifications_as_read(&self, user_id: &str) -> Result<usize> {
        mark_all_notifications_as_read(&mut self.conn.borrow_mut(), user_id)
    }
    fn count_unread_notifications(&self, user_id: &str) -> Result<usize> {
        count_unread_notifications(&mut self.conn.borrow_mut(), user_id)
    }
}

impl NotificationRepo for DbConnection<'_> {
    fn create_notification(&self, notification: &Notification) -> Result<()> {
        create_notification(&mut self.conn.borrow_mut(), notification)
    }
    fn notifications_of_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        notifications_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn mark_notification_as_read(&self, user_id: &str, id: &str) -> Result<()> {
        mark_notification_as_read(&mut self.conn.borrow_mut(), user_id, id)
    }
    fn mark_all_notifications_as_read(&self, user_id: &str) -> Result<usize> {
        mark_all_notifications_as_read(&mut self.conn.borrow_mut(), user_id)
    }
    fn count_unread_notifications(&self, user_id: &str) -> Result<usize> {
        count_unread_notifications(&mut self.conn.borrow_mut(), user_id)
    }
}

fn load_notification(model: models::Notification) -> Result<Notification> {
    let models::Notification {
        id,
        user_id,
        message,
        notification_type,
        is_read,
        created_at,
    } = model;
    Ok(Notification {
        id: id.into(),
        user_id: user_id.into(),
        message,
        notification_type: load_enum(&notification_type, "notification type")?,
        is_read,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_notification(conn: &mut SqliteConnection, n: &Notification) -> Result<()> {
    let model = models::Notification {
        id: n.id.to_string(),
        user_id: n.user_id.to_string(),
        message: n.message.clone(),
        notification_type: n.notification_type.to_string(),
        is_read: n.is_read,
        created_at: n.created_at.as_millis(),
    };
    diesel::insert_into(schema::notifications::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn notifications_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Notification>> {
    use schema::notifications::dsl;
    dsl::notifications
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::id)
        .load::<models::Notification>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_notification)
        .collect()
}

fn mark_notification_as_read(conn: &mut SqliteConnection, user_id: &str, id: &str) -> Result<()> {
    use schema::notifications::dsl;
    let count = diesel::update(
        dsl::notifications
            .filter(dsl::id.eq(id))
            .filter(dsl::user_id.eq(user_id)),
    )
    .set(dsl::is_read.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn mark_all_notifications_as_read(conn: &mut SqliteConnection, user_id: &str) -> Result<usize> {
    use schema::notifications::dsl;
    diesel::update(
        dsl::notifications
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::is_read.eq(false)),
    )
    .set(dsl::is_read.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)
}

fn count_unread_notifications(conn: &mut SqliteConnection, user_id: &str) -> Result<usize> {
    use schema::notifications::dsl;
    let n = dsl::notifications
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::is_read.eq(false))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}
