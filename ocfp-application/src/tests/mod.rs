pub mod prelude {

    pub use ocfp_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            ocfp_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self { db_connections }
        }

        pub fn create_user(&self, uid: &str, name: &str) -> User {
            flows::create_user(
                &self.db_connections,
                uid,
                usecases::NewUser {
                    name: name.into(),
                    email: format!("{}@example.com", uid),
                },
            )
            .unwrap()
        }

        pub fn create_talk(&self, uid: &str, title: &str) -> Talk {
            flows::create_talk(
                &self.db_connections,
                uid,
                usecases::NewTalk {
                    title: title.into(),
                    description: Some("lorem ipsum".into()),
                    ..Default::default()
                },
            )
            .unwrap()
        }

        /// Creates a conference with an open CfP window; `customize` may
        /// adjust the parameters before the event is stored.
        pub fn create_event<F>(&self, uid: &str, customize: F) -> Event
        where
            F: FnOnce(&mut usecases::NewEvent),
        {
            let now = Timestamp::now().as_secs();
            let mut new_event = usecases::NewEvent {
                title: "RustFest".into(),
                kind: "conference".into(),
                cfp_start: Some(now - 3600),
                cfp_end: Some(now + 3600),
                ..Default::default()
            };
            customize(&mut new_event);
            flows::create_event(&self.db_connections, uid, new_event).unwrap()
        }

        pub fn create_event_of_org(&self, uid: &str, org_id: &str) -> Event {
            self.create_event(uid, |new_event| {
                new_event.organization = Some(org_id.to_string());
            })
        }

        pub fn try_get_proposal(&self, id: &str) -> Option<Proposal> {
            match self.db_connections.shared().unwrap().get_proposal(id) {
                Ok(proposal) => Some(proposal),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn get_proposal(&self, id: &str) -> Proposal {
            self.try_get_proposal(id).unwrap()
        }
    }
}
