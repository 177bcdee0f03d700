use eventhub_entities::{comment::Comment, event::Event, id::Id, user::User};

/// A resource that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> &Id;
}

impl Owned for Event {
    fn owner_id(&self) -> &Id {
        &self.creator_id
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> &Id {
        &self.user_id
    }
}

/// Only an active owner may update or delete a resource.
///
/// Admins don't pass this check for resources of other users,
/// they have to use the moderation use cases instead.
pub fn can_modify<R: Owned>(user: &User, resource: &R) -> bool {
    !user.is_blocked() && resource.owner_id() == &user.id
}
