use super::{not_found_as, prelude::*};

pub fn get_profile<R: UserRepo>(repo: &R, account_id: &str) -> Result<User> {
    repo.get_user(account_id)
        .map_err(|err| not_found_as(err, Error::Unauthorized))
}

/// Refresh the last activity of an authenticated user.
pub fn record_activity<R: UserRepo>(repo: &R, account_id: &str, now: Timestamp) -> Result<()> {
    let mut user = get_profile(repo, account_id)?;
    user.last_online = Some(now);
    repo.update_user(&user)?;
    Ok(())
}

/// Personal activity summary of a user.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    /// Active events created by the user
    pub created_events      : usize,
    pub participated_events : usize,
    /// Comments that have not been deleted
    pub comments            : usize,
    /// Sum of the scores of all comments that have not been deleted
    pub rating              : i64,
}

pub fn user_dashboard<D>(db: &D, account_id: &str) -> Result<Dashboard>
where
    D: UserRepo + EventRepo + ParticipantRepo + CommentRepo,
{
    let account = get_profile(db, account_id)?;
    let id = account.id.as_str();
    Ok(Dashboard {
        created_events: db.count_events_created_by(id, &EventStatus::ACTIVE)?,
        participated_events: db.count_participations_of_user(id, ParticipationStatus::Going)?,
        comments: db.count_comments_of_user(id, CommentStatus::Visible)?,
        rating: db.sum_comment_scores_of_user(id, CommentStatus::Visible)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use eventhub_entities::builders::*;

    #[test]
    fn record_activity_of_existing_user() {
        let db = MockDb::default();
        let user = db.add_user(User::build().finish());
        let now = Timestamp::now();
        record_activity(&db, user.id.as_str(), now).unwrap();
        assert_eq!(Some(now), get_profile(&db, user.id.as_str()).unwrap().last_online);
        assert!(matches!(
            record_activity(&db, "unknown", now),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn summarize_the_activity_of_a_user() {
        let db = MockDb::default();
        let alice = db.add_user(User::build().username("alice").finish());
        let bob = db.add_user(User::build().username("bob").finish());
        let alice_id = alice.id.as_str();

        let event = db.add_event(Event::build().creator(alice_id).finish());
        db.add_event(
            Event::build()
                .creator(alice_id)
                .status(EventStatus::Verified)
                .finish(),
        );
        db.add_event(
            Event::build()
                .creator(alice_id)
                .status(EventStatus::Removed)
                .finish(),
        );
        db.add_event(Event::build().creator(bob.id.as_str()).finish());

        for (event_id, status) in [
            (event.id.clone(), ParticipationStatus::Going),
            (Id::new(), ParticipationStatus::Going),
            (Id::new(), ParticipationStatus::Declined),
        ] {
            db.save_participant(&Participant {
                event_id,
                user_id: alice.id.clone(),
                status,
                joined_at: Timestamp::now(),
            })
            .unwrap();
        }

        for (score, status) in [
            (3, CommentStatus::Visible),
            (-1, CommentStatus::Visible),
            (10, CommentStatus::Deleted),
        ] {
            let mut comment = Comment::build()
                .event(event.id.as_str())
                .author(alice_id)
                .status(status)
                .finish();
            comment.score = score;
            db.add_comment(comment);
        }
        db.add_comment(
            Comment::build()
                .event(event.id.as_str())
                .author(bob.id.as_str())
                .finish(),
        );

        assert_eq!(
            Dashboard {
                created_events: 2,
                participated_events: 2,
                comments: 2,
                rating: 2,
            },
            user_dashboard(&db, alice_id).unwrap()
        );
        assert_eq!(
            Dashboard {
                created_events: 1,
                participated_events: 0,
                comments: 1,
                rating: 0,
            },
            user_dashboard(&db, bob.id.as_str()).unwrap()
        );
        assert!(matches!(
            user_dashboard(&db, "unknown"),
            Err(Error::Unauthorized)
        ));
    }
}
