use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id         : Id,
    pub name       : String,
    pub slug       : String,
    pub created_at : Timestamp,
}

impl Tag {
    pub fn new(name: String, created_at: Timestamp) -> Self {
        let slug = slugify(&name);
        Self {
            id: Id::new(),
            name,
            slug,
            created_at,
        }
    }
}

/// Derive a lowercase, URL-safe identifier from an arbitrary name.
///
/// Every run of characters that are not ASCII alphanumerics collapses
/// into a single `-`. Leading and trailing separators are removed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}
