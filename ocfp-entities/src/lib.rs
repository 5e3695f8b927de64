#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ocfp-entities
//!
//! Reusable, agnostic domain entities for OpenCfP.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod event;
pub mod id;
pub mod message;
pub mod organization;
pub mod proposal;
pub mod rating;
pub mod talk;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
