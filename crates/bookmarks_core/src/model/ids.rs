//! Identifier types for users and content items.
//!
//! # Responsibility
//! - Wrap host-provided numeric ids so user and content ids cannot be mixed.
//! - Parse loosely-typed request values into ids at the boundary.
//!
//! # Invariants
//! - Both ids are always non-zero.
//! - `ContentId` serializes as a bare integer to keep stored arrays compact.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Rejection of the zero sentinel where an id is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroIdError;

impl Display for ZeroIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "identifier must be non-zero")
    }
}

impl std::error::Error for ZeroIdError {}

/// Opaque identifier of one authenticated host user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(u64);

impl UserId {
    /// Returns `None` for the zero sentinel.
    pub fn new(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for UserId {
    type Error = ZeroIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ZeroIdError)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of one content item in the host content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ContentId(u64);

impl ContentId {
    /// Returns `None` for the zero sentinel.
    pub fn new(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Parses a request value with integer-prefix semantics.
    ///
    /// Leading whitespace and an optional sign are accepted, then the longest
    /// run of ASCII digits is used: `"12abc"` parses to `12`. Values without
    /// a digit prefix, negative values and zero yield `None`.
    pub fn parse_loose(raw: &str) -> Option<Self> {
        parse_loose_int(raw)
            .and_then(|value| u64::try_from(value).ok())
            .and_then(Self::new)
    }
}

impl TryFrom<u64> for ContentId {
    type Error = ZeroIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ZeroIdError)
    }
}

impl From<ContentId> for u64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer-prefix parse shared by id and option parsing.
///
/// Returns `None` when no digits follow the optional sign. Saturates instead
/// of overflowing.
pub fn parse_loose_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_digit())
            .map_or(rest.len(), |(index, _)| index);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
