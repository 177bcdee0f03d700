use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, password::Password, primitive::InvalidPrimitive, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub username    : String,
    pub email       : String,
    pub password    : Password,
    pub role        : Role,
    pub avatar_url  : Option<String>,
    pub status      : AccountStatus,
    pub last_online : Option<Timestamp>,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_blocked(&self) -> bool {
        self.status == AccountStatus::Blocked
    }
}

pub type RolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    #[default]
    User  = 0,
    Admin = 1,
}

pub type AccountStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Active  = 0,
    Blocked = 1,
}

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidPrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

impl TryFrom<AccountStatusPrimitive> for AccountStatus {
    type Error = InvalidPrimitive;
    fn try_from(from: AccountStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPrimitive(from))
    }
}

impl From<AccountStatus> for AccountStatusPrimitive {
    fn from(from: AccountStatus) -> Self {
        from.to_i16().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role() {
        assert_eq!(Role::Admin, "admin".parse().unwrap());
        assert_eq!(Role::User, "user".parse().unwrap());
        assert!("scout".parse::<Role>().is_err());
        assert_eq!("admin", Role::Admin.as_ref());
    }

    #[test]
    fn primitive_round_trip() {
        assert_eq!(Role::Admin, Role::try_from(RolePrimitive::from(Role::Admin)).unwrap());
        assert!(AccountStatus::try_from(7).is_err());
    }
}
