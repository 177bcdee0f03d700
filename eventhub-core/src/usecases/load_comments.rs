use super::{load_active_event, prelude::*};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: Option<User>,
}

/// A top-level comment with all of its visible replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: CommentWithAuthor,
    pub replies: Vec<CommentWithAuthor>,
}

/// Load the comment threads of an event.
///
/// Threads are ordered newest first, replies oldest first.
/// Deleted comments are omitted unless they still have
/// visible replies. In that case their content is redacted.
pub fn load_comments<D>(db: &D, event_id: &str) -> Result<Vec<CommentThread>>
where
    D: UserRepo + EventRepo + CommentRepo,
{
    let event = load_active_event(db, event_id)?;
    // oldest first
    let comments = db.comments_of_event(event.id.as_str())?;

    let user_ids: Vec<_> = comments.iter().map(|c| c.user_id.as_str()).collect();
    let authors: HashMap<_, _> = db
        .get_users(&user_ids)?
        .into_iter()
        .map(|u| (u.id.clone(), u))
        .collect();
    let parents: HashMap<_, _> = comments
        .iter()
        .map(|c| (c.id.clone(), c.parent_id.clone()))
        .collect();
    let thread_root = |comment: &Comment| -> Id {
        let mut id = comment.id.clone();
        // bounded by the number of comments to tolerate cycles
        for _ in 0..parents.len() {
            match parents.get(&id) {
                Some(Some(parent_id)) if parents.contains_key(parent_id) => {
                    id = parent_id.clone();
                }
                _ => break,
            }
        }
        id
    };
    let with_author = |comment: Comment| CommentWithAuthor {
        author: authors.get(&comment.user_id).cloned(),
        comment,
    };

    let mut threads: Vec<CommentThread> = vec![];
    let mut replies: HashMap<Id, Vec<CommentWithAuthor>> = HashMap::new();
    for comment in comments {
        if comment.is_reply() {
            if !comment.is_deleted() {
                replies
                    .entry(thread_root(&comment))
                    .or_default()
                    .push(with_author(comment));
            }
        } else {
            threads.push(CommentThread {
                comment: with_author(comment),
                replies: vec![],
            });
        }
    }
    for thread in &mut threads {
        thread.replies = replies.remove(&thread.comment.comment.id).unwrap_or_default();
    }
    threads.retain(|t| !t.comment.comment.is_deleted() || !t.replies.is_empty());
    for thread in &mut threads {
        if thread.comment.comment.is_deleted() {
            thread.comment.comment.content.clear();
        }
    }
    threads.reverse();
    Ok(threads)
}
