pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{event_builder::*, proposal_builder::*, talk_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn uid(mut self, uid: &str) -> Self {
            self.user.uid = uid.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    uid: "".into(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                },
            }
        }
    }
}

pub mod talk_builder {

    use super::*;
    use crate::{id::*, talk::*, time::*};

    #[derive(Debug)]
    pub struct TalkBuild {
        talk: Talk,
    }

    impl TalkBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.talk.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.talk.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.talk.description = Some(desc.into());
            self
        }
        pub fn level(mut self, level: TalkLevel) -> Self {
            self.talk.level = Some(level);
            self
        }
        pub fn speakers(mut self, speakers: Vec<impl Into<Id>>) -> Self {
            self.talk.speakers = speakers.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Talk {
            self.talk
        }
    }

    impl Builder for Talk {
        type Build = TalkBuild;
        fn build() -> Self::Build {
            TalkBuild {
                talk: Talk {
                    id: Id::new(),
                    title: "".into(),
                    description: None,
                    level: None,
                    language: None,
                    references: None,
                    speakers: vec![],
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn kind(mut self, kind: EventKind) -> Self {
            self.event.kind = kind;
            self
        }
        pub fn owner(mut self, owner: impl Into<Id>) -> Self {
            self.event.owner = owner.into();
            self
        }
        pub fn organization(mut self, org: impl Into<Id>) -> Self {
            self.event.organization = Some(org.into());
            self
        }
        pub fn cfp_window(mut self, start: i64, end: i64) -> Self {
            self.event.cfp_start = Some(Timestamp::from_secs(start));
            self.event.cfp_end = Some(Timestamp::from_secs(end));
            self
        }
        pub fn max_proposals(mut self, max: u32) -> Self {
            self.event.max_proposals = Some(max);
            self
        }
        pub fn formats_required(mut self) -> Self {
            self.event.formats_required = true;
            self
        }
        pub fn categories_required(mut self) -> Self {
            self.event.categories_required = true;
            self
        }
        pub fn format(mut self, id: &str, name: &str) -> Self {
            self.event.formats.push(EventFormat {
                id: id.into(),
                name: name.into(),
            });
            self
        }
        pub fn category(mut self, id: &str, name: &str) -> Self {
            self.event.categories.push(EventCategory {
                id: id.into(),
                name: name.into(),
            });
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> Self::Build {
            EventBuild {
                event: Event {
                    id: Id::new(),
                    title: "".into(),
                    description: None,
                    kind: EventKind::Conference,
                    owner: Id::new(),
                    organization: None,
                    cfp_start: None,
                    cfp_end: None,
                    max_proposals: None,
                    formats_required: false,
                    categories_required: false,
                    formats: vec![],
                    categories: vec![],
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod proposal_builder {

    use super::*;
    use crate::{id::*, proposal::*, time::*};

    #[derive(Debug)]
    pub struct ProposalBuild {
        proposal: Proposal,
    }

    impl ProposalBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.proposal.id = id.into();
            self
        }
        pub fn talk(mut self, talk_id: impl Into<Id>) -> Self {
            self.proposal.talk_id = talk_id.into();
            self
        }
        pub fn event(mut self, event_id: impl Into<Id>) -> Self {
            self.proposal.event_id = event_id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.proposal.title = title.into();
            self
        }
        pub fn status(mut self, status: ProposalStatus) -> Self {
            self.proposal.status = status;
            self
        }
        pub fn speakers(mut self, speakers: Vec<impl Into<Id>>) -> Self {
            self.proposal.speakers = speakers.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Proposal {
            self.proposal
        }
    }

    impl Builder for Proposal {
        type Build = ProposalBuild;
        fn build() -> Self::Build {
            ProposalBuild {
                proposal: Proposal {
                    id: Id::new(),
                    talk_id: Id::new(),
                    event_id: Id::new(),
                    title: "".into(),
                    description: None,
                    level: None,
                    language: None,
                    references: None,
                    comments: None,
                    status: ProposalStatus::Submitted,
                    speakers: vec![],
                    formats: vec![],
                    categories: vec![],
                    created_at: Timestamp::from_secs(0),
                    updated_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}
