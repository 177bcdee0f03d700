use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn users_with_role(&self, role: Role) -> Result<Vec<User>> {
        users_with_role(&mut self.conn.borrow_mut(), role)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
    fn count_users_created_since(&self, since: Timestamp) -> Result<usize> {
        count_users_created_since(&mut self.conn.borrow_mut(), since)
    }
    fn count_users_online_since(&self, since: Timestamp) -> Result<usize> {
        count_users_online_since(&mut self.conn.borrow_mut(), since)
    }
}

impl UserRepo for DbReadWrite<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn users_with_role(&self, role: Role) -> Result<Vec<User>> {
        users_with_role(&mut self.conn.borrow_mut(), role)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
    fn count_users_created_since(&self, since: Timestamp) -> Result<usize> {
        count_users_created_since(&mut self.conn.borrow_mut(), since)
    }
    fn count_users_online_since(&self, since: Timestamp) -> Result<usize> {
        count_users_online_since(&mut self.conn.borrow_mut(), since)
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn users_with_role(&self, role: Role) -> Result<Vec<User>> {
        users_with_role(&mut self.conn.borrow_mut(), role)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
    fn count_users_created_since(&self, since: Timestamp) -> Result<usize> {
        count_users_created_since(&mut self.conn.borrow_mut(), since)
    }
    fn count_users_online_since(&self, since: Timestamp) -> Result<usize> {
        count_users_online_since(&mut self.conn.borrow_mut(), since)
    }
}

fn new_user(u: &User) -> models::NewUser<'_> {
    models::NewUser {
        id: u.id.as_str(),
        username: &u.username,
        email: &u.email,
        password: u.password.as_ref(),
        role: u.role.into(),
        avatar_url: u.avatar_url.as_deref(),
        status: u.status.into(),
        last_online: u.last_online.map(Timestamp::as_millis),
        created_at: u.created_at.as_millis(),
        updated_at: u.updated_at.as_millis(),
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        username,
        email,
        password,
        role,
        avatar_url,
        status,
        last_online,
        created_at,
        updated_at,
    } = entity;
    Ok(User {
        id: id.into(),
        username,
        email,
        password: Password::from_hash(password),
        role: load_primitive(role, "role")?,
        avatar_url,
        status: load_primitive(status, "account status")?,
        last_online: last_online.map(Timestamp::from_millis),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_users(entities: Vec<models::UserEntity>) -> Result<Vec<User>> {
    entities.into_iter().map(load_user).collect()
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    diesel::insert_into(schema::users::table)
        .values(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.as_str())))
        .set(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(entity)
}

fn get_users(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<User>> {
    use schema::users::dsl;
    let entities = dsl::users
        .filter(dsl::id.eq_any(ids))
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_users(entities)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn try_get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    let entities = dsl::users
        .order_by(dsl::created_at.desc())
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_users(entities)
}

fn users_with_role(conn: &mut SqliteConnection, role: Role) -> Result<Vec<User>> {
    use schema::users::dsl;
    let entities = dsl::users
        .filter(dsl::role.eq(RolePrimitive::from(role)))
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_users(entities)
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    let n = dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn count_users_created_since(conn: &mut SqliteConnection, since: Timestamp) -> Result<usize> {
    use schema::users::dsl;
    let n = dsl::users
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::created_at.ge(since.as_millis()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}

fn count_users_online_since(conn: &mut SqliteConnection, since: Timestamp) -> Result<usize> {
    use schema::users::dsl;
    let n = dsl::users
        .select(diesel::dsl::count(dsl::id))
        .filter(dsl::last_online.ge(since.as_millis()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count(n))
}
