use super::prelude::*;

/// Soft delete a comment on behalf of its author.
///
/// The comment stays in the store as parent of its replies.
pub fn delete_comment<D>(db: &D, account_id: &str, comment_id: &str) -> Result<()>
where
    D: UserRepo + CommentRepo,
{
    let account = super::authorize_account(db, account_id)?;
    let comment = db.get_comment(comment_id)?;
    super::authorize_owner(&account, &comment)?;
    mark_comment_as_deleted(db, comment)?;
    Ok(())
}

pub(crate) fn mark_comment_as_deleted<R: CommentRepo>(repo: &R, mut comment: Comment) -> Result<Comment> {
    if comment.is_deleted() {
        return Err(InvalidState::CommentDeleted.into());
    }
    comment.status = CommentStatus::Deleted;
    comment.updated_at = Timestamp::now();
    repo.update_comment(&comment)?;
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use eventhub_entities::builders::*;

    #[test]
    fn author_deletes_own_comment() {
        let db = MockDb::default();
        let author = db.add_user(User::build().finish());
        let comment = db.add_comment(Comment::build().author(author.id.as_str()).finish());
        delete_comment(&db, author.id.as_str(), comment.id.as_str()).unwrap();
        let deleted = db.get_comment(comment.id.as_str()).unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(comment.content, deleted.content);
        assert!(matches!(
            delete_comment(&db, author.id.as_str(), comment.id.as_str()),
            Err(Error::InvalidState(InvalidState::CommentDeleted))
        ));
    }

    #[test]
    fn others_cannot_delete() {
        let db = MockDb::default();
        let author = db.add_user(User::build().finish());
        let other = db.add_user(User::build().finish());
        let comment = db.add_comment(Comment::build().author(author.id.as_str()).finish());
        assert!(matches!(
            delete_comment(&db, other.id.as_str(), comment.id.as_str()),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            delete_comment(&db, other.id.as_str(), "missing"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
