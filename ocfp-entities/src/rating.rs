use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::id::*;

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Feeling {
    Negative = 0,
    Neutral = 1,
    Positive = 2,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

/// One reviewer's opinion on one proposal.
///
/// Uniqueness on (user, proposal) is enforced by the store; the absence of
/// a row means "not rated".
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub proposal_id : Id,
    pub user_id     : Id,
    pub value       : RatingValue,
    pub feeling     : Feeling,
}
