use super::*;

#[post("/register", format = "application/json", data = "<data>")]
pub fn post_register(
    connections: &State<Connections>,
    jwt_state: &State<jwt::JwtState>,
    data: JsonResult<json::RegisterRequest>,
) -> Result<json::AuthResponse> {
    let new_user = from_json::new_user(data?.into_inner());
    let user = flows::register_user(connections, new_user)?;
    let token = jwt_state.generate_token(&user)?;
    Ok(Json(json::AuthResponse {
        token,
        user: user.into(),
    }))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    connections: &State<Connections>,
    jwt_state: &State<jwt::JwtState>,
    login: JsonResult<json::LoginRequest>,
) -> Result<json::AuthResponse> {
    let login = login?.into_inner();
    let credentials = usecases::Credentials {
        email: &login.email,
        password: &login.password,
    };
    let user = flows::login(connections, &credentials).map_err(|err| {
        debug!("Login with email '{}' failed: {err}", login.email);
        err
    })?;
    let token = jwt_state.generate_token(&user)?;
    Ok(Json(json::AuthResponse {
        token,
        user: user.into(),
    }))
}

#[get("/profile")]
pub fn get_profile(account: Account) -> Json<json::User> {
    Json(account.into_user().into())
}

#[get("/user/dashboard")]
pub fn get_dashboard(
    connections: &State<Connections>,
    account: Account,
) -> Result<json::Dashboard> {
    let dashboard = usecases::user_dashboard(&connections.shared()?, account.id())?;
    Ok(Json(to_json::dashboard(dashboard)))
}

#[get("/user/events")]
pub fn get_created_events(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::Event>> {
    let db = connections.shared()?;
    let events = usecases::events_created_by(&db, account.id())?;
    Ok(Json(event_details(&db, events)?))
}

#[get("/user/participated")]
pub fn get_participated_events(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::Event>> {
    let db = connections.shared()?;
    let events = usecases::events_participated_by(&db, account.id())?;
    Ok(Json(event_details(&db, events)?))
}
