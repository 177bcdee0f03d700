use super::{create_comment::validate_content, prelude::*};

pub fn update_comment<D>(
    db: &D,
    account_id: &str,
    comment_id: &str,
    content: &str,
) -> Result<Comment>
where
    D: UserRepo + CommentRepo,
{
    let account = super::authorize_account(db, account_id)?;
    let mut comment = db.get_comment(comment_id)?;
    super::authorize_owner(&account, &comment)?;
    if comment.is_deleted() {
        return Err(InvalidState::CommentDeleted.into());
    }
    comment.content = validate_content(content)?;
    comment.updated_at = Timestamp::now();
    db.update_comment(&comment)?;
    Ok(comment)
}
