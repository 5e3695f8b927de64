use super::*;
use crate::repositories::Error as RepoError;

use std::{cell::RefCell, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Identifiable {
    fn id(&self) -> &str;
}

impl Identifiable for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identifiable for Talk {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identifiable for Event {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identifiable for Organization {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identifiable for Proposal {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identifiable for Message {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Identifiable>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Identifiable>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    } else {
        objects.push(e);
    }
    Ok(())
}

fn update<T: Clone + Identifiable>(objects: &mut Vec<T>, e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Identifiable>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub talks: RefCell<Vec<Talk>>,
    pub events: RefCell<Vec<Event>>,
    pub orgs: RefCell<Vec<Organization>>,
    pub org_members: RefCell<Vec<OrganizationMember>>,
    pub proposals: RefCell<Vec<Proposal>>,
    pub ratings: RefCell<Vec<Rating>>,
    pub messages: RefCell<Vec<Message>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.uid == user.uid) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn get_user_by_uid(&self, uid: &str) -> RepoResult<User> {
        self.try_get_user_by_uid(uid)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_uid(&self, uid: &str) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.uid == uid).cloned())
    }
}

impl TalkRepo for MockDb {
    fn create_talk(&self, talk: Talk) -> RepoResult<()> {
        create(&mut self.talks.borrow_mut(), talk)
    }

    fn update_talk(&self, talk: &Talk) -> RepoResult<()> {
        update(&mut self.talks.borrow_mut(), talk)
    }

    fn get_talk(&self, id: &str) -> RepoResult<Talk> {
        get(&self.talks.borrow(), id)
    }

    fn talks_of_speaker(&self, user_id: &str) -> RepoResult<Vec<Talk>> {
        Ok(self
            .talks
            .borrow()
            .iter()
            .filter(|t| t.speakers.iter().any(|s| s.as_str() == user_id))
            .cloned()
            .collect())
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: Event) -> RepoResult<()> {
        create(&mut self.events.borrow_mut(), event)
    }

    fn get_event(&self, id: &str) -> RepoResult<Event> {
        get(&self.events.borrow(), id)
    }

    fn all_events_chronologically(&self) -> RepoResult<Vec<Event>> {
        let mut events = self.events.borrow().clone();
        events.sort_by_key(|e| e.created_at);
        Ok(events)
    }

    fn count_events(&self) -> RepoResult<usize> {
        Ok(self.events.borrow().len())
    }
}

impl OrganizationRepo for MockDb {
    fn create_org(&self, org: Organization) -> RepoResult<()> {
        create(&mut self.orgs.borrow_mut(), org)
    }

    fn get_org(&self, id: &str) -> RepoResult<Organization> {
        get(&self.orgs.borrow(), id)
    }

    fn add_org_member(&self, member: &OrganizationMember) -> RepoResult<()> {
        let mut members = self.org_members.borrow_mut();
        if members
            .iter()
            .any(|m| m.organization_id == member.organization_id && m.user_id == member.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        members.push(member.clone());
        Ok(())
    }

    fn get_org_member(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> RepoResult<Option<OrganizationMember>> {
        Ok(self
            .org_members
            .borrow()
            .iter()
            .find(|m| m.organization_id.as_str() == org_id && m.user_id.as_str() == user_id)
            .cloned())
    }
}

impl ProposalRepo for MockDb {
    fn create_proposal(&self, proposal: Proposal) -> RepoResult<()> {
        if self
            .proposals
            .borrow()
            .iter()
            .any(|p| p.talk_id == proposal.talk_id && p.event_id == proposal.event_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.proposals.borrow_mut(), proposal)
    }

    fn update_proposal(&self, proposal: &Proposal) -> RepoResult<()> {
        update(&mut self.proposals.borrow_mut(), proposal)
    }

    fn update_proposal_status(&self, id: &str, status: ProposalStatus) -> RepoResult<()> {
        let mut proposals = self.proposals.borrow_mut();
        let proposal = proposals
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        proposal.status = status;
        Ok(())
    }

    fn delete_proposal(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.proposals.borrow_mut(), id)
    }

    fn get_proposal(&self, id: &str) -> RepoResult<Proposal> {
        get(&self.proposals.borrow(), id)
    }

    fn get_proposal_of_talk(
        &self,
        talk_id: &str,
        event_id: &str,
    ) -> RepoResult<Option<Proposal>> {
        Ok(self
            .proposals
            .borrow()
            .iter()
            .find(|p| p.talk_id.as_str() == talk_id && p.event_id.as_str() == event_id)
            .cloned())
    }

    fn proposals_of_event(&self, event_id: &str) -> RepoResult<Vec<Proposal>> {
        Ok(self
            .proposals
            .borrow()
            .iter()
            .filter(|p| p.event_id.as_str() == event_id)
            .cloned()
            .collect())
    }

    fn proposals_of_speaker(&self, event_id: &str, user_id: &str) -> RepoResult<Vec<Proposal>> {
        Ok(self
            .proposals
            .borrow()
            .iter()
            .filter(|p| {
                p.event_id.as_str() == event_id
                    && p.speakers.iter().any(|s| s.as_str() == user_id)
            })
            .cloned()
            .collect())
    }
}

impl RatingRepo for MockDb {
    fn upsert_rating(&self, rating: Rating) -> RepoResult<()> {
        let mut ratings = self.ratings.borrow_mut();
        if let Some(pos) = ratings
            .iter()
            .position(|r| r.user_id == rating.user_id && r.proposal_id == rating.proposal_id)
        {
            ratings[pos] = rating;
        } else {
            ratings.push(rating);
        }
        Ok(())
    }

    fn delete_rating(&self, user_id: &str, proposal_id: &str) -> RepoResult<()> {
        self.ratings.borrow_mut().retain(|r| {
            !(r.user_id.as_str() == user_id && r.proposal_id.as_str() == proposal_id)
        });
        Ok(())
    }

    fn get_rating(&self, user_id: &str, proposal_id: &str) -> RepoResult<Option<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.proposal_id.as_str() == proposal_id)
            .cloned())
    }

    fn ratings_of_proposal(&self, proposal_id: &str) -> RepoResult<Vec<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .filter(|r| r.proposal_id.as_str() == proposal_id)
            .cloned()
            .collect())
    }
}

impl MessageRepo for MockDb {
    fn create_message(&self, message: Message) -> RepoResult<()> {
        create(&mut self.messages.borrow_mut(), message)
    }

    fn update_message(&self, message: &Message) -> RepoResult<()> {
        update(&mut self.messages.borrow_mut(), message)
    }

    fn delete_message(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.messages.borrow_mut(), id)
    }

    fn get_message(&self, id: &str) -> RepoResult<Message> {
        get(&self.messages.borrow(), id)
    }

    fn messages_of_proposal(&self, proposal_id: &str) -> RepoResult<Vec<Message>> {
        let mut messages: Vec<_> = self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.proposal_id.as_str() == proposal_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.created_at);
        Ok(messages)
    }
}
