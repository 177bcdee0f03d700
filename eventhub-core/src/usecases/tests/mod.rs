use super::prelude::*;
use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

/// In-memory entity store for testing use cases.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub events: RefCell<Vec<Event>>,
    pub tags: RefCell<Vec<Tag>>,
    pub participants: RefCell<Vec<Participant>>,
    pub comments: RefCell<Vec<Comment>>,
    pub votes: RefCell<Vec<CommentVote>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub admin_actions: RefCell<Vec<AdminAction>>,
}

impl MockDb {
    pub fn add_user(&self, user: User) -> User {
        self.users.borrow_mut().push(user.clone());
        user
    }

    pub fn add_event(&self, event: Event) -> Event {
        self.events.borrow_mut().push(event.clone());
        event
    }

    pub fn add_comment(&self, comment: Comment) -> Comment {
        self.comments.borrow_mut().push(comment.clone());
        comment
    }
}

fn replace<T: Clone>(
    items: &RefCell<Vec<T>>,
    item: &T,
    matches: impl Fn(&T) -> bool,
) -> RepoResult<()> {
    let mut items = items.borrow_mut();
    let found = items.iter_mut().find(|x| matches(x)).ok_or(RepoError::NotFound)?;
    *found = item.clone();
    Ok(())
}

fn upsert<T: Clone>(items: &RefCell<Vec<T>>, item: &T, matches: impl Fn(&T) -> bool) {
    let mut items = items.borrow_mut();
    if let Some(found) = items.iter_mut().find(|x| matches(x)) {
        *found = item.clone();
    } else {
        items.push(item.clone());
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.id == user.id || u.email == user.email || u.username == user.username)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        replace(&self.users, user, |u| u.id == user.id)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn get_users(&self, ids: &[&str]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| ids.contains(&u.id.as_str()))
            .cloned()
            .collect())
    }
    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.email == email).cloned())
    }
    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        let mut users = self.users.borrow().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
    fn users_with_role(&self, role: Role) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
    fn count_users_created_since(&self, since: Timestamp) -> RepoResult<usize> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| u.created_at >= since)
            .count())
    }
    fn count_users_online_since(&self, since: Timestamp) -> RepoResult<usize> {
        Ok(self
            .users
            .borrow()
            .iter()
            .filter(|u| u.last_online.is_some_and(|t| t >= since))
            .count())
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: &Event) -> RepoResult<()> {
        if self.events.borrow().iter().any(|e| e.id == event.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
    fn update_event(&self, event: &Event) -> RepoResult<()> {
        replace(&self.events, event, |e| e.id == event.id)
    }
    fn get_event(&self, id: &str) -> RepoResult<Event> {
        self.events
            .borrow()
            .iter()
            .find(|e| e.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn query_events(&self, query: &EventQuery) -> RepoResult<Vec<Event>> {
        let mut events: Vec<_> = self
            .events
            .borrow()
            .iter()
            .filter(|e| {
                query
                    .status
                    .as_ref()
                    .map_or(true, |status| status.contains(&e.status))
            })
            .filter(|e| query.types.is_empty() || query.types.contains(&e.event_type))
            .filter(|e| query.created_by.as_ref().map_or(true, |id| *id == e.creator_id))
            .filter(|e| query.starts_at_or_after.map_or(true, |ts| e.event_date >= ts))
            .filter(|e| query.starts_before.map_or(true, |ts| e.event_date < ts))
            .filter(|e| {
                query
                    .tag_slug
                    .as_ref()
                    .map_or(true, |slug| e.tags.iter().any(|t| t.slug == *slug))
            })
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }
    fn count_events(&self) -> RepoResult<usize> {
        Ok(self.events.borrow().len())
    }
    fn count_events_with_status(&self, status: &[EventStatus]) -> RepoResult<usize> {
        Ok(self
            .events
            .borrow()
            .iter()
            .filter(|e| status.contains(&e.status))
            .count())
    }
    fn count_events_created_by(
        &self,
        creator_id: &str,
        status: &[EventStatus],
    ) -> RepoResult<usize> {
        Ok(self
            .events
            .borrow()
            .iter()
            .filter(|e| e.creator_id.as_str() == creator_id && status.contains(&e.status))
            .count())
    }
    fn most_joined_events(
        &self,
        status: &[EventStatus],
        limit: usize,
    ) -> RepoResult<Vec<(Event, usize)>> {
        let mut ranking: Vec<_> = self
            .events
            .borrow()
            .iter()
            .filter(|e| status.contains(&e.status))
            .map(|e| {
                let count = self
                    .count_participants(e.id.as_str(), ParticipationStatus::Going)
                    .unwrap_or_default();
                (e.clone(), count)
            })
            .collect();
        ranking.sort_by(|(_, a), (_, b)| b.cmp(a));
        ranking.truncate(limit);
        Ok(ranking)
    }
}

impl TagRepo for MockDb {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> RepoResult<()> {
        if !self.tags.borrow().iter().any(|t| t.name == tag.name) {
            self.tags.borrow_mut().push(tag.clone());
        }
        Ok(())
    }
    fn try_get_tag_by_name(&self, name: &str) -> RepoResult<Option<Tag>> {
        Ok(self.tags.borrow().iter().find(|t| t.name == name).cloned())
    }
    fn all_tags(&self) -> RepoResult<Vec<Tag>> {
        Ok(self.tags.borrow().clone())
    }
}

impl ParticipantRepo for MockDb {
    fn save_participant(&self, participant: &Participant) -> RepoResult<()> {
        upsert(&self.participants, participant, |p| {
            p.event_id == participant.event_id && p.user_id == participant.user_id
        });
        Ok(())
    }
    fn try_get_participant(&self, event_id: &str, user_id: &str) -> RepoResult<Option<Participant>> {
        Ok(self
            .participants
            .borrow()
            .iter()
            .find(|p| p.event_id.as_str() == event_id && p.user_id.as_str() == user_id)
            .cloned())
    }
    fn participants_of_event(
        &self,
        event_id: &str,
        status: ParticipationStatus,
    ) -> RepoResult<Vec<Participant>> {
        let mut participants: Vec<_> = self
            .participants
            .borrow()
            .iter()
            .filter(|p| p.event_id.as_str() == event_id && p.status == status)
            .cloned()
            .collect();
        participants.sort_by(|a, b| a.joined_at.cmp(&b.joined_at));
        Ok(participants)
    }
    fn participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> RepoResult<Vec<Participant>> {
        let mut participants: Vec<_> = self
            .participants
            .borrow()
            .iter()
            .filter(|p| p.user_id.as_str() == user_id && p.status == status)
            .cloned()
            .collect();
        participants.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
        Ok(participants)
    }
    fn count_participants(&self, event_id: &str, status: ParticipationStatus) -> RepoResult<usize> {
        Ok(self
            .participants
            .borrow()
            .iter()
            .filter(|p| p.event_id.as_str() == event_id && p.status == status)
            .count())
    }
    fn count_participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> RepoResult<usize> {
        Ok(self
            .participants
            .borrow()
            .iter()
            .filter(|p| p.user_id.as_str() == user_id && p.status == status)
            .count())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        self.comments.borrow_mut().push(comment.clone());
        Ok(())
    }
    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        replace(&self.comments, comment, |c| c.id == comment.id)
    }
    fn get_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn comments_of_event(&self, event_id: &str) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.event_id.as_str() == event_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
    fn count_comments_with_status(&self, status: CommentStatus) -> RepoResult<usize> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.status == status)
            .count())
    }
    fn count_comments_of_user(&self, user_id: &str, status: CommentStatus) -> RepoResult<usize> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.user_id.as_str() == user_id && c.status == status)
            .count())
    }
    fn sum_comment_scores_of_user(&self, user_id: &str, status: CommentStatus) -> RepoResult<i64> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.user_id.as_str() == user_id && c.status == status)
            .map(|c| c.score)
            .sum())
    }
}

impl CommentVoteRepo for MockDb {
    fn save_vote(&self, vote: &CommentVote) -> RepoResult<()> {
        upsert(&self.votes, vote, |v| {
            v.comment_id == vote.comment_id && v.user_id == vote.user_id
        });
        Ok(())
    }
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        let len = votes.len();
        votes.retain(|v| !(v.comment_id.as_str() == comment_id && v.user_id.as_str() == user_id));
        if votes.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
    fn try_get_vote(&self, comment_id: &str, user_id: &str) -> RepoResult<Option<CommentVote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| v.comment_id.as_str() == comment_id && v.user_id.as_str() == user_id)
            .cloned())
    }
    fn tally_votes(&self, comment_id: &str) -> RepoResult<VoteTally> {
        let votes = self.votes.borrow();
        let count = |vote_type| {
            votes
                .iter()
                .filter(|v| v.comment_id.as_str() == comment_id && v.vote_type == vote_type)
                .count() as u64
        };
        Ok(VoteTally {
            upvotes: count(VoteType::Upvote),
            downvotes: count(VoteType::Downvote),
        })
    }
}

impl NotificationRepo for MockDb {
    fn create_notification(&self, notification: &Notification) -> RepoResult<()> {
        self.notifications.borrow_mut().push(notification.clone());
        Ok(())
    }
    fn notifications_of_user(&self, user_id: &str) -> RepoResult<Vec<Notification>> {
        let mut notifications: Vec<_> = self
            .notifications
            .borrow()
            .iter()
            .filter(|n| n.user_id.as_str() == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }
    fn mark_notification_as_read(&self, user_id: &str, id: &str) -> RepoResult<()> {
        let mut notifications = self.notifications.borrow_mut();
        let n = notifications
            .iter_mut()
            .find(|n| n.id.as_str() == id && n.user_id.as_str() == user_id)
            .ok_or(RepoError::NotFound)?;
        n.is_read = true;
        Ok(())
    }
    fn mark_all_notifications_as_read(&self, user_id: &str) -> RepoResult<usize> {
        let mut count = 0;
        for n in self
            .notifications
            .borrow_mut()
            .iter_mut()
            .filter(|n| n.user_id.as_str() == user_id && !n.is_read)
        {
            n.is_read = true;
            count += 1;
        }
        Ok(count)
    }
    fn count_unread_notifications(&self, user_id: &str) -> RepoResult<usize> {
        Ok(self
            .notifications
            .borrow()
            .iter()
            .filter(|n| n.user_id.as_str() == user_id && !n.is_read)
            .count())
    }
}

impl AdminActionRepo for MockDb {
    fn log_admin_action(&self, action: &AdminAction) -> RepoResult<()> {
        self.admin_actions.borrow_mut().push(action.clone());
        Ok(())
    }
    fn all_admin_actions(&self) -> RepoResult<Vec<AdminAction>> {
        let mut actions = self.admin_actions.borrow().clone();
        actions.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        Ok(actions)
    }
}
