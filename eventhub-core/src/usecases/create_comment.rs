use super::{load_active_event, prelude::*};

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub parent_id: Option<String>,
}

pub(crate) fn validate_content(content: &str) -> Result<String> {
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::EmptyComment);
    }
    Ok(content.to_owned())
}

/// Comment on an event or reply to an existing comment.
pub fn create_comment<D>(
    db: &D,
    account_id: &str,
    event_id: &str,
    new_comment: NewComment,
) -> Result<(Comment, NotificationEvent)>
where
    D: UserRepo + EventRepo + CommentRepo,
{
    let author = super::authorize_account(db, account_id)?;
    let event = load_active_event(db, event_id)?;
    let NewComment { content, parent_id } = new_comment;
    let content = validate_content(&content)?;
    let parent = match parent_id {
        Some(parent_id) => {
            let parent = db.get_comment(&parent_id)?;
            if parent.is_deleted() || parent.event_id != event.id {
                return Err(RepoError::NotFound.into());
            }
            Some(parent)
        }
        None => None,
    };
    let now = Timestamp::now();
    let comment = Comment {
        id: Id::new(),
        event_id: event.id,
        user_id: author.id.clone(),
        parent_id: parent.as_ref().map(|p| p.id.clone()),
        content,
        score: 0,
        status: CommentStatus::Visible,
        created_at: now,
        updated_at: now,
    };
    db.create_comment(&comment)?;
    let notification = NotificationEvent::CommentCreated {
        title: event.title,
        event_creator_id: event.creator_id,
        author_id: author.id,
        author_name: author.username,
        parent_author_id: parent.map(|p| p.user_id),
    };
    Ok((comment, notification))
}
