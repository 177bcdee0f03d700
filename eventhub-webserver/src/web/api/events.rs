use super::*;

#[get("/events")]
pub fn get_events(
    connections: &State<Connections>,
    _account: Account,
) -> Result<Vec<json::Event>> {
    let db = connections.shared()?;
    let events = usecases::list_events(&db, &usecases::EventFilter::default())?;
    Ok(Json(event_details(&db, events)?))
}

#[post("/events", format = "application/json", data = "<data>")]
pub fn post_event(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    data: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    let new_event = from_json::new_event(data?.into_inner());
    let event = flows::create_event(connections, &*notify.0, account.id(), new_event)?;
    single_event_details(&connections.shared()?, event)
}

#[post("/events/filter", format = "application/json", data = "<data>")]
pub fn post_events_filter(
    connections: &State<Connections>,
    _account: Account,
    data: JsonResult<json::EventFilter>,
) -> Result<Vec<json::Event>> {
    let filter = from_json::event_filter(data?.into_inner());
    let db = connections.shared()?;
    let events = usecases::list_events(&db, &filter)?;
    Ok(Json(event_details(&db, events)?))
}

#[get("/events/<id>")]
pub fn get_event(
    connections: &State<Connections>,
    _account: Account,
    id: &str,
) -> Result<json::Event> {
    let db = connections.shared()?;
    let event = usecases::get_event(&db, id)?;
    single_event_details(&db, event)
}

#[put("/events/<id>", format = "application/json", data = "<data>")]
pub fn put_event(
    connections: &State<Connections>,
    account: Account,
    id: &str,
    data: JsonResult<json::UpdateEvent>,
) -> Result<json::Event> {
    let update = from_json::try_update_event(data?.into_inner())?;
    let event = flows::update_event(connections, account.id(), id, update)?;
    single_event_details(&connections.shared()?, event)
}

#[delete("/events/<id>")]
pub fn delete_event(
    connections: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<()> {
    flows::delete_event(connections, account.id(), id)?;
    Ok(Json(()))
}

#[post("/events/<id>/participate")]
pub fn post_participation(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::Participant> {
    let participant = flows::join_event(connections, &*notify.0, account.id(), id)?;
    Ok(Json(participant.into()))
}

#[delete("/events/<id>/participate")]
pub fn delete_participation(
    connections: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<()> {
    flows::cancel_participation(connections, account.id(), id)?;
    Ok(Json(()))
}

#[get("/events/<id>/participants")]
pub fn get_participants(
    connections: &State<Connections>,
    _account: Account,
    id: &str,
) -> Result<Vec<json::Participant>> {
    let participants = usecases::event_participants(&connections.shared()?, id)?;
    Ok(Json(
        participants
            .into_iter()
            .map(to_json::participant_with_user)
            .collect(),
    ))
}

#[get("/events/<id>/comments")]
pub fn get_comments(
    connections: &State<Connections>,
    _account: Account,
    id: &str,
) -> Result<Vec<json::Comment>> {
    let threads = usecases::load_comments(&connections.shared()?, id)?;
    Ok(Json(threads.into_iter().map(to_json::comment_thread).collect()))
}

#[post("/events/<id>/comments", format = "application/json", data = "<data>")]
pub fn post_comment(
    connections: &State<Connections>,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    data: JsonResult<json::NewComment>,
) -> Result<json::Comment> {
    let new_comment = from_json::new_comment(data?.into_inner());
    let comment = flows::create_comment(connections, &*notify.0, account.id(), id, new_comment)?;
    Ok(Json(json::Comment {
        user: Some(account.into_user().into()),
        ..comment.into()
    }))
}
