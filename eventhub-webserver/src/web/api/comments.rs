use super::*;

#[put("/comments/<id>", format = "application/json", data = "<data>")]
pub fn put_comment(
    connections: &State<Connections>,
    account: Account,
    id: &str,
    data: JsonResult<json::UpdateComment>,
) -> Result<json::Comment> {
    let json::UpdateComment { content } = data?.into_inner();
    let comment = flows::update_comment(connections, account.id(), id, &content)?;
    Ok(Json(json::Comment {
        user: Some(account.into_user().into()),
        ..comment.into()
    }))
}

#[delete("/comments/<id>")]
pub fn delete_comment(
    connections: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<()> {
    flows::delete_comment(connections, account.id(), id)?;
    Ok(Json(()))
}

#[post("/comments/<id>/vote", format = "application/json", data = "<data>")]
pub fn post_vote(
    connections: &State<Connections>,
    account: Account,
    id: &str,
    data: JsonResult<json::Vote>,
) -> Result<json::VoteResult> {
    let json::Vote { vote_type } = data?.into_inner();
    let result = flows::vote_comment(connections, account.id(), id, vote_type.into())?;
    Ok(Json(to_json::vote_result(result)))
}
