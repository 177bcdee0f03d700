use super::prelude::*;

const MAX_TITLE_LEN: usize = 200;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title            : String,
    pub description      : String,
    pub event_date       : Timestamp,
    pub location         : Location,
    pub event_type       : EventType,
    pub max_participants : Option<u32>,
    pub price            : f64,
    pub address          : Option<String>,
    pub tags             : Vec<String>,
    pub media            : Vec<NewMedia>,
}

#[derive(Debug, Clone)]
pub struct NewMedia {
    pub file_url: String,
    pub file_type: String,
}

pub(crate) fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return Err(Error::Title);
    }
    Ok(title.to_owned())
}

pub(crate) fn validate_description(description: &str) -> Result<String> {
    let description = description.trim();
    if description.is_empty() {
        return Err(Error::Description);
    }
    Ok(description.to_owned())
}

pub(crate) fn validate_location(location: Location) -> Result<Location> {
    if !location.is_valid() {
        return Err(Error::InvalidPosition);
    }
    Ok(location)
}

pub(crate) fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Price);
    }
    Ok(price)
}

pub(crate) fn validate_max_participants(max: Option<u32>) -> Result<Option<u32>> {
    if max == Some(0) {
        return Err(Error::MaxParticipants);
    }
    Ok(max)
}

/// Look up tags by name and create missing ones.
pub fn resolve_tags<R: TagRepo>(repo: &R, names: &[String], now: Timestamp) -> Result<Vec<Tag>> {
    let mut tags: Vec<Tag> = Vec::with_capacity(names.len());
    for name in names.iter().map(|name| name.trim()).filter(|name| !name.is_empty()) {
        if tags.iter().any(|t| t.name == name) {
            continue;
        }
        let tag = match repo.try_get_tag_by_name(name)? {
            Some(tag) => tag,
            None => {
                let tag = Tag::new(name.to_owned(), now);
                if tag.slug.is_empty() {
                    return Err(Error::Tag);
                }
                log::debug!("Creating new tag '{}' ({})", tag.name, tag.slug);
                repo.create_tag_if_it_does_not_exist(&tag)?;
                tag
            }
        };
        tags.push(tag);
    }
    Ok(tags)
}

pub(crate) fn media_from(new_media: Vec<NewMedia>) -> Vec<Media> {
    new_media
        .into_iter()
        .enumerate()
        .map(|(index, NewMedia { file_url, file_type })| Media {
            id: Id::new(),
            file_url,
            file_type,
            order_index: index as u32,
        })
        .collect()
}

/// Create a new event that is pending verification.
///
/// All admins are notified about the new event.
pub fn create_event<D>(
    db: &D,
    account_id: &str,
    new_event: NewEvent,
) -> Result<(Event, NotificationEvent)>
where
    D: UserRepo + EventRepo + TagRepo,
{
    let creator = super::authorize_account(db, account_id)?;
    let NewEvent {
        title,
        description,
        event_date,
        location,
        event_type,
        max_participants,
        price,
        address,
        tags,
        media,
    } = new_event;
    let now = Timestamp::now();
    let event = Event {
        id: Id::new(),
        title: validate_title(&title)?,
        description: validate_description(&description)?,
        event_date,
        location: validate_location(location)?,
        event_type,
        max_participants: validate_max_participants(max_participants)?,
        price: validate_price(price)?,
        address: address
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty()),
        status: EventStatus::Pending,
        creator_id: creator.id.clone(),
        created_at: now,
        updated_at: now,
        tags: resolve_tags(db, &tags, now)?,
        media: media_from(media),
    };
    log::debug!("Creating new event {} by {}", event.id, creator.username);
    db.create_event(&event)?;
    let admin_ids = db
        .users_with_role(Role::Admin)?
        .into_iter()
        .map(|admin| admin.id)
        .collect();
    let notification = NotificationEvent::EventCreated {
        title: event.title.clone(),
        creator_id: creator.id,
        admin_ids,
    };
    Ok((event, notification))
}
