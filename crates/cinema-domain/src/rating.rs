//! Star rating value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated star value in `Star::MIN..=Star::MAX`.
///
/// Serialized as a bare integer. Deserializing an out-of-range number fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Star(i16);

/// Returned when a star value is outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("star must be between {min} and {max}, got {got}", min = Star::MIN, max = Star::MAX)]
pub struct StarOutOfRange {
    pub got: i16,
}

impl Star {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(value: i16) -> Result<Self, StarOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StarOutOfRange { got: value })
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for Star {
    type Error = StarOutOfRange;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Star> for i16 {
    fn from(star: Star) -> Self {
        star.0
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
