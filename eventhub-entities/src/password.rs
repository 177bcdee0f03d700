use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A bcrypt-hashed password.
///
/// The plain text is never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps an already hashed password, e.g. loaded from a database.
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password must contain at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.chars().count() < MIN_PASSWORD_LEN {
            return Err(ParseError::TooShort);
        }
        Ok(Self(bcrypt::hash(plain)?))
    }
}
