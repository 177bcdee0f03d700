///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
        role -> SmallInt,
        avatar_url -> Nullable<Text>,
        status -> SmallInt,
        last_online -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (id) {
        id -> Text,
        title -> Text,
        description -> Text,
        event_date -> BigInt,
        lat -> Double,
        lon -> Double,
        event_type -> Text,
        max_participants -> Nullable<BigInt>,
        price -> Double,
        address -> Nullable<Text>,
        status -> SmallInt,
        creator_id -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    event_media (id) {
        id -> Text,
        event_id -> Text,
        file_url -> Text,
        file_type -> Text,
        order_index -> Integer,
    }
}

joinable!(event_media -> events (event_id));

table! {
    event_participants (event_id, user_id) {
        event_id -> Text,
        user_id -> Text,
        status -> SmallInt,
        joined_at -> BigInt,
    }
}

joinable!(event_participants -> events (event_id));

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (id) {
        id -> Text,
        name -> Text,
        slug -> Text,
        created_at -> BigInt,
    }
}

table! {
    event_tags (event_id, tag_id) {
        event_id -> Text,
        tag_id -> Text,
    }
}

joinable!(event_tags -> events (event_id));
joinable!(event_tags -> tags (tag_id));

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comments (id) {
        id -> Text,
        event_id -> Text,
        user_id -> Text,
        parent_id -> Nullable<Text>,
        content -> Text,
        score -> BigInt,
        status -> SmallInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(comments -> events (event_id));

table! {
    comment_votes (comment_id, user_id) {
        comment_id -> Text,
        user_id -> Text,
        vote_type -> SmallInt,
        voted_at -> BigInt,
    }
}

joinable!(comment_votes -> comments (comment_id));

///////////////////////////////////////////////////////////////////////
// Notifications
///////////////////////////////////////////////////////////////////////

table! {
    notifications (id) {
        id -> Text,
        user_id -> Text,
        message -> Text,
        notification_type -> Text,
        is_read -> Bool,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Moderation
///////////////////////////////////////////////////////////////////////

table! {
    admin_actions (id) {
        id -> Text,
        admin_id -> Text,
        action_type -> Text,
        target_id -> Text,
        target_type -> Text,
        reason -> Nullable<Text>,
        performed_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    events,
    event_media,
    event_participants,
    tags,
    event_tags,
    comments,
    comment_votes,
    notifications,
    admin_actions,
);
