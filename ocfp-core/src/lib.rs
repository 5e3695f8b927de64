pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use ocfp_entities::{
        email::*, event::*, id::*, message::*, organization::*, proposal::*, rating::*, talk::*,
        time::*, user::*,
    };
}
