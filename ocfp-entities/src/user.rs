use crate::{email::*, id::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    /// Opaque identity of the external authentication provider.
    pub uid   : String,
    pub name  : String,
    pub email : EmailAddress,
}
