use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteResult {
    pub comment: Comment,
    /// The vote of the user after toggling, if any
    pub vote: Option<VoteType>,
}

/// Toggle the vote of a user on a comment.
///
/// - no vote yet: the vote is stored
/// - same vote type again: the vote is removed
/// - opposite vote type: the vote is replaced
///
/// Callers must run this within a single transaction, otherwise
/// concurrent votes may leave a stale score.
pub fn vote_comment<D>(
    db: &D,
    account_id: &str,
    comment_id: &str,
    vote_type: VoteType,
) -> Result<VoteResult>
where
    D: UserRepo + CommentRepo + CommentVoteRepo,
{
    let account = super::authorize_account(db, account_id)?;
    let comment = db.get_comment(comment_id)?;
    if comment.is_deleted() {
        return Err(InvalidState::CommentDeleted.into());
    }
    let vote = match db.try_get_vote(comment_id, account_id)? {
        Some(existing) if existing.vote_type == vote_type => {
            db.delete_vote(comment_id, account_id)?;
            None
        }
        _ => {
            let vote = CommentVote {
                comment_id: comment.id.clone(),
                user_id: account.id,
                vote_type,
                voted_at: Timestamp::now(),
            };
            db.save_vote(&vote)?;
            Some(vote_type)
        }
    };
    let comment = recalculate_comment_score(db, comment)?;
    Ok(VoteResult { comment, vote })
}

/// Replace the cached score by the tally of all votes.
pub fn recalculate_comment_score<D>(db: &D, mut comment: Comment) -> Result<Comment>
where
    D: CommentRepo + CommentVoteRepo,
{
    let score = db.tally_votes(comment.id.as_str())?.score();
    if comment.score != score {
        comment.score = score;
        db.update_comment(&comment)?;
    }
    Ok(comment)
}
