use thiserror::Error;

/// A stored status or enum code without a matching variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid primitive value: {0}")]
pub struct InvalidPrimitive(pub i16);
