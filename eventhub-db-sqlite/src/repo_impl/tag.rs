use super::*;

impl TagRepo for DbReadOnly<'_> {
    fn create_tag_if_it_does_not_exist(&self, _tag: &Tag) -> Result<()> {
        unreachable!();
    }
    fn try_get_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        try_get_tag_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbReadWrite<'_> {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()> {
        create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), tag)
    }
    fn try_get_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        try_get_tag_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbConnection<'_> {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()> {
        create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), tag)
    }
    fn try_get_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        try_get_tag_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
}

pub(super) fn load_tag(tag: models::Tag) -> Tag {
    let models::Tag {
        id,
        name,
        slug,
        created_at,
    } = tag;
    Tag {
        id: id.into(),
        name,
        slug,
        created_at: Timestamp::from_millis(created_at),
    }
}

fn create_tag_if_it_does_not_exist(conn: &mut SqliteConnection, tag: &Tag) -> Result<()> {
    let model = models::Tag {
        id: tag.id.to_string(),
        name: tag.name.clone(),
        slug: tag.slug.clone(),
        created_at: tag.created_at.as_millis(),
    };
    let res = diesel::insert_into(schema::tags::table)
        .values(&model)
        .execute(conn);
    match res {
        Ok(_) | Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => Ok(()),
        Err(err) => Err(from_diesel_err(err)),
    }
}

fn try_get_tag_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .filter(dsl::name.eq(name))
        .first::<models::Tag>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_tag))
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .order_by(dsl::name)
        .load::<models::Tag>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_tag)
        .collect())
}
