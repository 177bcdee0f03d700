use super::*;

impl AdminActionRepo for DbReadOnly<'_> {
    fn log_admin_action(&self, _action: &AdminAction) -> Result<()> {
        unreachable!();
    }
    fn all_admin_actions(&self) -> Result<Vec<AdminAction>> {
        all_admin_actions(&mut self.conn.borrow_mut())
    }
}

impl AdminActionRepo for DbReadWrite<'_> {
    fn log_admin_action(&self, action: &AdminAction) -> Result<()> {
        log_admin_action(&mut self.conn.borrow_mut(), action)
    }
    fn all_admin_actions(&self) -> Result<Vec<AdminAction>> {
        all_admin_actions(&mut self.conn.borrow_mut())
    }
}

impl AdminActionRepo for DbConnection<'_> {
    fn log_admin_action(&self, action: &AdminAction) -> Result<()> {
        log_admin_action(&mut self.conn.borrow_mut(), action)
    }
    fn all_admin_actions(&self) -> Result<Vec<AdminAction>> {
        all_admin_actions(&mut self.conn.borrow_mut())
    }
}

fn log_admin_action(conn: &mut SqliteConnection, action: &AdminAction) -> Result<()> {
    let model = models::AdminAction {
        id: action.id.to_string(),
        admin_id: action.admin_id.to_string(),
        action_type: action.action_type.to_string(),
        target_id: action.target_id.to_string(),
        target_type: action.target_type.to_string(),
        reason: action.reason.clone(),
        performed_at: action.performed_at.as_millis(),
    };
    diesel::insert_into(schema::admin_actions::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_admin_action(model: models::AdminAction) -> Result<AdminAction> {
    let models::AdminAction {
        id,
        admin_id,
        action_type,
        target_id,
        target_type,
        reason,
        performed_at,
    } = model;
    Ok(AdminAction {
        id: id.into(),
        admin_id: admin_id.into(),
        action_type: load_enum(&action_type, "admin action")?,
        target_id: target_id.into(),
        target_type: load_enum(&target_type, "target type")?,
        reason,
        performed_at: Timestamp::from_millis(performed_at),
    })
}

fn all_admin_actions(conn: &mut SqliteConnection) -> Result<Vec<AdminAction>> {
    use schema::admin_actions::dsl;
    dsl::admin_actions
        .order_by(dsl::performed_at.desc())
        .then_order_by(dsl::id)
        .load::<models::AdminAction>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_admin_action)
        .collect()
}
