use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::id::Id;

/// Role of an organization member.
///
/// Reviewers have read access to the proposals of the organization's
/// events but must not mutate them.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
    FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum MemberRole {
    Reviewer  = 0,
    Organizer = 1,
}

impl Default for MemberRole {
    fn default() -> MemberRole {
        MemberRole::Reviewer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationMember {
    pub organization_id: Id,
    pub user_id: Id,
    pub role: MemberRole,
}

impl OrganizationMember {
    pub fn may_manage(&self) -> bool {
        self.role >= MemberRole::Organizer
    }
}
