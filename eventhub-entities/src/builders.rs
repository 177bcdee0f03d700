pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, event_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn password(mut self, plain: &str) -> Self {
            self.user.password = plain.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn status(mut self, status: AccountStatus) -> Self {
            self.user.status = status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.user.created_at = created_at;
            self
        }
        pub fn last_online(mut self, last_online: Option<Timestamp>) -> Self {
            self.user.last_online = last_online;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let id = Id::new();
            let now = Timestamp::now();
            UserBuild {
                user: User {
                    username: format!("user-{id}"),
                    email: format!("{id}@example.com"),
                    id,
                    password: Password::from_hash(String::new()),
                    role: Role::User,
                    avatar_url: None,
                    status: AccountStatus::Active,
                    last_online: None,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, location::*, tag::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn creator(mut self, creator_id: &str) -> Self {
            self.event.creator_id = creator_id.into();
            self
        }
        pub fn status(mut self, status: EventStatus) -> Self {
            self.event.status = status;
            self
        }
        pub fn event_type(mut self, event_type: EventType) -> Self {
            self.event.event_type = event_type;
            self
        }
        pub fn event_date(mut self, event_date: Timestamp) -> Self {
            self.event.event_date = event_date;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.event.created_at = created_at;
            self
        }
        pub fn max_participants(mut self, max: Option<u32>) -> Self {
            self.event.max_participants = max;
            self
        }
        pub fn tags(mut self, names: Vec<&str>) -> Self {
            let now = self.event.created_at;
            self.event.tags = names
                .into_iter()
                .map(|name| Tag::new(name.to_owned(), now))
                .collect();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            let now = Timestamp::now();
            EventBuild {
                event: Event {
                    id: Id::new(),
                    title: "An event".into(),
                    description: "Something happens".into(),
                    event_date: now,
                    location: Location::new(48.137, 11.575),
                    event_type: EventType::Meetup,
                    max_participants: None,
                    price: 0.0,
                    address: None,
                    status: EventStatus::Pending,
                    creator_id: Id::new(),
                    created_at: now,
                    updated_at: now,
                    tags: vec![],
                    media: vec![],
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn event(mut self, event_id: &str) -> Self {
            self.comment.event_id = event_id.into();
            self
        }
        pub fn author(mut self, user_id: &str) -> Self {
            self.comment.user_id = user_id.into();
            self
        }
        pub fn parent(mut self, parent_id: Option<&str>) -> Self {
            self.comment.parent_id = parent_id.map(Into::into);
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn status(mut self, status: CommentStatus) -> Self {
            self.comment.status = status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            let now = Timestamp::now();
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    event_id: Id::new(),
                    user_id: Id::new(),
                    parent_id: None,
                    content: "Nice".into(),
                    score: 0,
                    status: CommentStatus::Visible,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
