use super::*;

fn reason(data: Option<Json<json::ModerationReason>>) -> Option<String> {
    data.and_then(|json| json.into_inner().reason)
        .filter(|reason| !reason.trim().is_empty())
}

#[get("/admin/events")]
pub fn get_events(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::Event>> {
    let db = connections.shared()?;
    let events = usecases::all_events(&db, account.id())?;
    Ok(Json(event_details(&db, events)?))
}

#[get("/admin/events/pending")]
pub fn get_pending_events(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::Event>> {
    let db = connections.shared()?;
    let events = usecases::pending_events(&db, account.id())?;
    Ok(Json(event_details(&db, events)?))
}

#[put("/admin/events/<id>/verify")]
pub fn put_verify_event(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::Event> {
    let event = flows::verify_event(connections, &*notify.0, account.id(), id)?;
    single_event_details(&connections.shared()?, event)
}

#[put("/admin/events/<id>/reject", format = "application/json", data = "<data>")]
pub fn put_reject_event(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    data: JsonResult<json::RejectEvent>,
) -> Result<json::Event> {
    let json::RejectEvent { reason } = data?.into_inner();
    let event = flows::reject_event(connections, &*notify.0, account.id(), id, &reason)?;
    single_event_details(&connections.shared()?, event)
}

#[delete("/admin/events/<id>", data = "<data>")]
pub fn delete_event(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    data: Option<Json<json::ModerationReason>>,
) -> Result<()> {
    let reason = reason(data);
    flows::remove_event(
        connections,
        &*notify.0,
        account.id(),
        id,
        reason.as_deref(),
    )?;
    Ok(Json(()))
}

#[get("/admin/users")]
pub fn get_users(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::User>> {
    let users = usecases::all_users(&connections.shared()?, account.id())?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[put("/admin/users/<id>/block", data = "<data>")]
pub fn put_block_user(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    data: Option<Json<json::ModerationReason>>,
) -> Result<json::User> {
    let reason = reason(data);
    let user = flows::block_user(
        connections,
        &*notify.0,
        account.id(),
        id,
        reason.as_deref(),
    )?;
    Ok(Json(user.into()))
}

#[put("/admin/users/<id>/unblock")]
pub fn put_unblock_user(
    connections: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<json::User> {
    let user = flows::unblock_user(connections, account.id(), id)?;
    Ok(Json(user.into()))
}

#[delete("/admin/comments/<id>", data = "<data>")]
pub fn delete_comment(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    data: Option<Json<json::ModerationReason>>,
) -> Result<()> {
    let reason = reason(data);
    flows::remove_comment(
        connections,
        &*notify.0,
        account.id(),
        id,
        reason.as_deref(),
    )?;
    Ok(Json(()))
}

#[get("/admin/statistics")]
pub fn get_statistics(
    connections: &State<Connections>,
    cfg: &State<Cfg>,
    account: Account,
) -> Result<json::Statistics> {
    let db = connections.shared()?;
    let mut statistics = usecases::statistics(&db, account.id(), Timestamp::now(), cfg.statistics)?;
    let pending_events = std::mem::take(&mut statistics.pending_events);
    let pending_events = usecases::load_event_details(&db, pending_events)?;
    Ok(Json(to_json::statistics(statistics, pending_events)))
}

#[get("/admin/actions")]
pub fn get_actions(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::AdminAction>> {
    let actions = usecases::admin_actions(&connections.shared()?, account.id())?;
    Ok(Json(actions.into_iter().map(Into::into).collect()))
}
