use super::{
    create_event::{
        resolve_tags, validate_description, validate_location, validate_max_participants,
        validate_price, validate_title,
    },
    load_active_event,
    prelude::*,
};

/// Changes of an existing event, `None` keeps the current value.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub title            : Option<String>,
    pub description      : Option<String>,
    pub event_date       : Option<Timestamp>,
    pub location         : Option<Location>,
    pub event_type       : Option<EventType>,
    pub max_participants : Option<Option<u32>>,
    pub price            : Option<f64>,
    pub address          : Option<String>,
    pub tags             : Option<Vec<String>>,
}

pub fn update_event<D>(
    db: &D,
    account_id: &str,
    event_id: &str,
    update: UpdateEvent,
) -> Result<Event>
where
    D: UserRepo + EventRepo + TagRepo + ParticipantRepo,
{
    let account = super::authorize_account(db, account_id)?;
    let mut event = load_active_event(db, event_id)?;
    super::authorize_owner(&account, &event)?;

    let UpdateEvent {
        title,
        description,
        event_date,
        location,
        event_type,
        max_participants,
        price,
        address,
        tags,
    } = update;
    let now = Timestamp::now();
    if let Some(title) = title {
        event.title = validate_title(&title)?;
    }
    if let Some(description) = description {
        event.description = validate_description(&description)?;
    }
    if let Some(event_date) = event_date {
        event.event_date = event_date;
    }
    if let Some(location) = location {
        event.location = validate_location(location)?;
    }
    if let Some(event_type) = event_type {
        event.event_type = event_type;
    }
    if let Some(max) = max_participants {
        let max = validate_max_participants(max)?;
        if let Some(max) = max {
            let going = db.count_participants(event.id.as_str(), ParticipationStatus::Going)?;
            if (max as usize) < going {
                return Err(InvalidState::CapacityBelowParticipants.into());
            }
        }
        event.max_participants = max;
    }
    if let Some(price) = price {
        event.price = validate_price(price)?;
    }
    if let Some(address) = address {
        let address = address.trim();
        event.address = (!address.is_empty()).then(|| address.to_owned());
    }
    if let Some(tags) = tags {
        event.tags = resolve_tags(db, &tags, now)?;
    }
    event.updated_at = now;
    log::debug!("Updating event {}", event.id);
    db.update_event(&event)?;
    Ok(event)
}
