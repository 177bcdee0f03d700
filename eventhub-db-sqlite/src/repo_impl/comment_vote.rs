use super::*;

impl CommentVoteRepo for DbReadOnly<'_> {
    fn save_vote(&self, _vote: &CommentVote) -> Result<()> {
        unreachable!();
    }
    fn delete_vote(&self, _comment_id: &str, _user_id: &str) -> Result<()> {
        unreachable!();
    }
    fn try_get_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<CommentVote>> {
        try_get_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn tally_votes(&self, comment_id: &str) -> Result<VoteTally> {
        tally_votes(&mut self.conn.borrow_mut(), comment_id)
    }
}

impl CommentVoteRepo for DbReadWrite<'_> {
    fn save_vote(&self, vote: &CommentVote) -> Result<()> {
        save_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn try_get_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<CommentVote>> {
        try_get_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn tally_votes(&self, comment_id: &str) -> Result<VoteTally> {
        tally_votes(&mut self.conn.borrow_mut(), comment_id)
    }
}

impl CommentVoteRepo for DbConnection<'_> {
    fn save_vote(&self, vote: &CommentVote) -> Result<()> {
        save_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn try_get_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<CommentVote>> {
        try_get_vote(&mut self.conn.borrow_mut(), comment_id, user_id)
    }
    fn tally_votes(&self, comment_id: &str) -> Result<VoteTally> {
        tally_votes(&mut self.conn.borrow_mut(), comment_id)
    }
}

fn save_vote(conn: &mut SqliteConnection, vote: &CommentVote) -> Result<()> {
    let model = models::CommentVote {
        comment_id: vote.comment_id.to_string(),
        user_id: vote.user_id.to_string(),
        vote_type: vote.vote_type.into(),
        voted_at: vote.voted_at.as_millis(),
    };
    diesel::replace_into(schema::comment_votes::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_vote(conn: &mut SqliteConnection, comment_id: &str, user_id: &str) -> Result<()> {
    use schema::comment_votes::dsl;
    let count = diesel::delete(
        dsl::comment_votes
            .filter(dsl::comment_id.eq(comment_id))
            .filter(dsl::user_id.eq(user_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn try_get_vote(
    conn: &mut SqliteConnection,
    comment_id: &str,
    user_id: &str,
) -> Result<Option<CommentVote>> {
    use schema::comment_votes::dsl;
    let Some(models::CommentVote {
        comment_id,
        user_id,
        vote_type,
        voted_at,
    }) = dsl::comment_votes
        .filter(dsl::comment_id.eq(comment_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::CommentVote>(conn)
        .optional()
        .map_err(from_diesel_err)?
    else {
        return Ok(None);
    };
    Ok(Some(CommentVote {
        comment_id: comment_id.into(),
        user_id: user_id.into(),
        vote_type: load_primitive(vote_type, "vote type")?,
        voted_at: Timestamp::from_millis(voted_at),
    }))
}

fn tally_votes(conn: &mut SqliteConnection, comment_id: &str) -> Result<VoteTally> {
    use schema::comment_votes::dsl;
    let rows = dsl::comment_votes
        .filter(dsl::comment_id.eq(comment_id))
        .group_by(dsl::vote_type)
        .select((dsl::vote_type, diesel::dsl::count_star()))
        .load::<(i16, i64)>(conn)
        .map_err(from_diesel_err)?;
    let mut tally = VoteTally::default();
    for (vote_type, n) in rows {
        let n = count(n) as u64;
        match load_primitive::<VoteType, _>(vote_type, "vote type")? {
            VoteType::Upvote => tally.upvotes = n,
            VoteType::Downvote => tally.downvotes = n,
        }
    }
    Ok(tally)
}
