use super::*;

impl CommentRepo for DbReadOnly<'_> {
    fn create_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }

    fn get_comment(&self, id: &str) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_event(&self, event_id: &str) -> Result<Vec<Comment>> {
        comments_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn count_comments_with_status(&self, status: CommentStatus) -> Result<usize> {
        count_comments_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_comments_of_user(&self, user_id: &str, status: CommentStatus) -> Result<usize> {
        count_comments_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
    fn sum_comment_scores_of_user(&self, user_id: &str, status: CommentStatus) -> Result<i64> {
        sum_comment_scores_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

impl CommentRepo for DbReadWrite<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }

    fn get_comment(&self, id: &str) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_event(&self, event_id: &str) -> Result<Vec<Comment>> {
        comments_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn count_comments_with_status(&self, status: CommentStatus) -> Result<usize> {
        count_comments_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_comments_of_user(&self, user_id: &str, status: CommentStatus) -> Result<usize> {
        count_comments_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
    fn sum_comment_scores_of_user(&self, user_id: &str, status: CommentStatus) -> Result<i64> {
        sum_comment_scores_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

impl CommentRepo for DbConnection<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }

    fn get_comment(&self, id: &str) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_event(&self, event_id: &str) -> Result<Vec<Comment>> {
        comments_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn count_comments_with_status(&self, status: CommentStatus) -> Result<usize> {
        count_comments_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn count_comments_of_user(&self, user_id: &str, status: CommentStatus) -> Result<usize> {
        count_comments_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
    fn sum_comment_scores_of_user(&self, user_id: &str, status: CommentStatus) -> Result<i64> {
        sum_comment_scores_of_user(&mut self.conn.borrow_mut(), user_id, status)
    }
}

fn new_comment(c: &Comment) -> models::NewComment<'_> {
    models::NewComment {
        id: c.id.as_str(),
        event_id: c.event_id.as_str(),
        user_id: c.user_id.as_str(),
        parent_id: c.parent_id.as_ref().map(Id::as_str),
        content: &c.content,
        score: c.score,
        status: c.status.into(),
        created_at: c.created_at.as_millis(),
        updated_at: c.updated_at.as_millis(),
    }
}

fn load_comment(entity: models::CommentEntity) -> Result<Comment> {
    let models::CommentEntity {
        id,
        event_id,
        user_id,
        parent_id,
        content,
        score,
        status,
        created_at,
        updated_at,
    } = entity;
    Ok(Comment {
        id: id.into(),
        event_id: event_id.into(),
        user_id: user_id.into(),
        parent_id: parent_id.map(Into::into),
        content,
        score,
        status: load_primitive(status, "comment status")?,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn create_comment(conn: &mut SqliteConnection, c: &Comment) -> Result<()> {
    diesel::insert_into(schema::comments::table)
        .values(&new_comment(c))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_comment(conn: &mut SqliteConnection, c: &Comment) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::update(dsl::comments.filter(dsl::id.eq(c.id.as_str())))
        .set(&new_comment(c))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::comments::dsl;
    let entity = dsl::comments
        .filter(dsl::id.eq(id))
        .first::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?;
    load_comment(entity)
}

fn comments_of_event(conn: &mut SqliteConnection, event_id: &str) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    dsl::comments
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::created_at)
        .then_order_by(dsl::id)
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_comment)
        .collect()
}

fn count_comments_with_status(conn: &mut SqliteConnection, status: CommentStatus) -> Result<usize> {
    use schema::comments::dsl;
    let n = dsl::comments
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::status.eq(CommentStatusPrimitive::from(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn count_comments_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    status: CommentStatus,
) -> Result<usize> {
    use schema::comments::dsl;
    let n = dsl::comments
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::status.eq(CommentStatusPrimitive::from(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn sum_comment_scores_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    status: CommentStatus,
) -> Result<i64> {
    use schema::comments::dsl;
    // diesel maps SUM(BigInt) to Numeric
    let scores = dsl::comments
        .select(dsl::score)
        .filter(dsl::user_id.eq(user_id))
        .filter(dsl::status.eq(CommentStatusPrimitive::from(status)))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(scores.into_iter().sum())
}
