use super::*;

pub mod prelude {

    use crate::web::{self, api, sqlite};
    use ocfp_application::prelude as flows;
    use ocfp_core::{entities::*, usecases};

    pub use crate::web::tests::prelude::{LocalResponse as Response, *};

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::setup(vec![("/", api::routes())])
    }

    pub fn auth(uid: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {}", uid))
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn register_user(db: &sqlite::Connections, uid: &str, name: &str) -> User {
        flows::create_user(
            db,
            uid,
            usecases::NewUser {
                name: name.into(),
                email: format!("{}@example.com", uid),
            },
        )
        .unwrap()
    }

    pub fn create_talk(db: &sqlite::Connections, uid: &str, title: &str) -> Talk {
        flows::create_talk(
            db,
            uid,
            usecases::NewTalk {
                title: title.into(),
                description: Some("blablabla".into()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    pub fn create_open_event<F>(db: &sqlite::Connections, uid: &str, customize: F) -> Event
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
        flows::create_event(db, uid, new_event).unwrap()
    }

    pub fn submit<'a>(
        client: &'a Client,
        uid: &str,
        event_id: &str,
        talk_id: &str,
        body: &str,
    ) -> Response<'a> {
        client
            .put(format!("/events/{}/submissions/{}", event_id, talk_id))
            .header(ContentType::JSON)
            .header(auth(uid))
            .body(body)
            .dispatch()
    }
}

use self::prelude::*;
use ocfp_core::{entities::ProposalStatus, repositories::*};

#[test]
fn register_a_new_user() {
    let (client, db) = setup();
    let response = client
        .post("/users")
        .header(ContentType::JSON)
        .header(auth("uid-1"))
        .body(r#"{"name":"Alice","email":"alice@example.com"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let user = db
        .shared()
        .unwrap()
        .get_user_by_uid("uid-1")
        .unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email.as_str(), "alice@example.com");
}

#[test]
fn register_without_identity() {
    let (client, _) = setup();
    let response = client
        .post("/users")
        .header(ContentType::JSON)
        .body(r#"{"name":"Alice","email":"alice@example.com"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
fn register_the_same_identity_twice() {
    let (client, _) = setup();
    for _ in 0..2 {
        let response = client
            .post("/users")
            .header(ContentType::JSON)
            .header(auth("uid-1"))
            .body(r#"{"name":"Alice","email":"alice@example.com"}"#)
            .dispatch();
        if response.status() != Status::Ok {
            assert_eq!(response.status(), Status::Conflict);
            return;
        }
    }
    panic!("second registration must fail");
}

#[test]
fn get_current_user() {
    let (client, db) = setup();
    register_user(&db, "uid-1", "Alice");
    let response = client
        .get("/users/current")
        .header(auth("uid-1"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body_str = response.into_string().unwrap();
    let user: ocfp_boundary::User = serde_json::from_str(&body_str).unwrap();
    assert_eq!(user.name, "Alice");

    // An identity that has never been registered resolves to nothing.
    let response = client
        .get("/users/current")
        .header(auth("uid-unknown"))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn events_are_public() {
    let (client, db) = setup();
    register_user(&db, "uid-1", "Alice");
    let event = create_open_event(&db, "uid-1", |_| {});
    let response = client.get("/events").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body_str = response.into_string().unwrap();
    assert!(body_str.contains(&format!("\"{}\"", event.id)));
    assert!(body_str.contains("\"cfp_open\":true"));

    let response = client.get(format!("/events/{}", event.id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
}

#[test]
fn submit_a_talk() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Fearless Concurrency");
    let event = create_open_event(&db, "speaker", |_| {});

    let response = submit(
        &client,
        "speaker",
        event.id.as_str(),
        talk.id.as_str(),
        r#"{"comments":"first time speaker"}"#,
    );
    assert_eq!(response.status(), Status::Ok);
    test_json(&response);
    let body_str = response.into_string().unwrap();
    let proposal_id: String = serde_json::from_str(&body_str).unwrap();

    let proposal = db.shared().unwrap().get_proposal(&proposal_id).unwrap();
    assert_eq!(proposal.title, "Fearless Concurrency");
    assert_eq!(proposal.status, ProposalStatus::Submitted);
    assert_eq!(proposal.comments.as_deref(), Some("first time speaker"));
}

#[test]
fn submit_somebody_elses_talk() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    register_user(&db, "intruder", "Ivan");
    let talk = create_talk(&db, "speaker", "Not yours");
    let event = create_open_event(&db, "intruder", |_| {});

    let response = submit(&client, "intruder", event.id.as_str(), talk.id.as_str(), "{}");
    assert_eq!(response.status(), Status::Forbidden);
}

#[test]
fn submit_with_unknown_identity() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Ghost talk");
    let event = create_open_event(&db, "speaker", |_| {});

    let response = submit(&client, "uid-unknown", event.id.as_str(), talk.id.as_str(), "{}");
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn submit_outside_the_cfp_window() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Too late");
    let now = Timestamp::now().as_secs();
    let event = create_open_event(&db, "speaker", |new_event| {
        new_event.cfp_start = Some(now - 7200);
        new_event.cfp_end = Some(now - 3600);
    });

    let response = submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), "{}");
    assert_eq!(response.status(), Status::Forbidden);
    let body_str = response.into_string().unwrap();
    assert!(body_str.contains("CFP is closed"));
}

#[test]
fn submit_twice_updates_the_proposal() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Idempotent");
    let event = create_open_event(&db, "speaker", |_| {});

    let first = submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), "{}")
        .into_string()
        .unwrap();
    let second = submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), "{}")
        .into_string()
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(
        db.shared()
            .unwrap()
            .proposals_of_event(event.id.as_str())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn required_formats_are_enforced() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Pick one");
    let event = create_open_event(&db, "speaker", |new_event| {
        new_event.formats_required = true;
        new_event.formats = vec!["Talk".into()];
    });

    let response = submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), "{}");
    assert_eq!(response.status(), Status::BadRequest);
    let body_str = response.into_string().unwrap();
    assert!(body_str.contains("Formats are required"));

    let format_id = event.formats[0].id.to_string();
    let body = format!(r#"{{"formats":["{}"]}}"#, format_id);
    let response = submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), &body);
    assert_eq!(response.status(), Status::Ok);
}

#[test]
fn cap_blocks_a_second_talk_but_not_a_resubmission() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk_a = create_talk(&db, "speaker", "Talk A");
    let talk_b = create_talk(&db, "speaker", "Talk B");
    let event = create_open_event(&db, "speaker", |new_event| {
        new_event.max_proposals = Some(1);
    });

    let first = submit(&client, "speaker", event.id.as_str(), talk_a.id.as_str(), "{}");
    assert_eq!(first.status(), Status::Ok);
    let first_id = first.into_string().unwrap();

    let second = submit(&client, "speaker", event.id.as_str(), talk_b.id.as_str(), "{}");
    assert_eq!(second.status(), Status::Forbidden);
    let body_str = second.into_string().unwrap();
    assert!(body_str.contains("Max proposals reached"));

    // Editing and resubmitting the first talk succeeds and keeps the id.
    ocfp_application::prelude::update_talk(
        &db,
        "speaker",
        talk_a.id.as_str(),
        ocfp_core::usecases::NewTalk {
            title: "Talk A".into(),
            description: Some("edited abstract".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let resubmit = submit(&client, "speaker", event.id.as_str(), talk_a.id.as_str(), "{}");
    assert_eq!(resubmit.status(), Status::Ok);
    assert_eq!(first_id, resubmit.into_string().unwrap());

    let proposal_id: String = serde_json::from_str(&first_id).unwrap();
    let proposal = db.shared().unwrap().get_proposal(&proposal_id).unwrap();
    assert_eq!(proposal.description.as_deref(), Some("edited abstract"));
}

#[test]
fn unsubmit_a_talk() {
    let (client, db) = setup();
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Changed my mind");
    let event = create_open_event(&db, "speaker", |_| {});

    submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), "{}");
    let response = client
        .delete(format!(
            "/events/{}/submissions/{}",
            event.id, talk.id
        ))
        .header(auth("speaker"))
        .dispatch();
    assert_eq!(response.status(), Status::NoContent);
    assert!(db
        .shared()
        .unwrap()
        .proposals_of_event(event.id.as_str())
        .unwrap()
        .is_empty());

    // A second withdrawal has nothing left to delete.
    let response = client
        .delete(format!(
            "/events/{}/submissions/{}",
            event.id, talk.id
        ))
        .header(auth("speaker"))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

fn setup_org_event() -> (
    Client,
    crate::web::sqlite::Connections,
    ocfp_core::entities::Event,
    String,
) {
    use ocfp_application::prelude as flows;
    use ocfp_core::usecases;

    let (client, db) = setup();
    register_user(&db, "owner", "Olga");
    let reviewer = register_user(&db, "reviewer", "Rita");
    register_user(&db, "speaker", "Sara");
    let talk = create_talk(&db, "speaker", "Borrow checker deep dive");

    let org = flows::create_organization(
        &db,
        "owner",
        usecases::NewOrganization {
            name: "Rust e.V.".into(),
        },
    )
    .unwrap();
    flows::add_organization_member(
        &db,
        "owner",
        org.id.as_str(),
        usecases::NewMember {
            user_id: reviewer.id.to_string(),
            role: "reviewer".into(),
        },
    )
    .unwrap();
    let event = create_open_event(&db, "owner", |new_event| {
        new_event.organization = Some(org.id.to_string());
    });
    let proposal_id: String = serde_json::from_str(
        &submit(&client, "speaker", event.id.as_str(), talk.id.as_str(), "{}")
            .into_string()
            .unwrap(),
    )
    .unwrap();
    (client, db, event, proposal_id)
}

#[test]
fn reviewer_must_not_change_the_proposal_status() {
    let (client, _db, event, proposal_id) = setup_org_event();

    let response = client
        .patch(format!("/events/{}/proposals/{}", event.id, proposal_id))
        .header(ContentType::JSON)
        .header(auth("reviewer"))
        .body(r#"{"status":"accepted"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);

    let response = client
        .patch(format!("/events/{}/proposals/{}", event.id, proposal_id))
        .header(ContentType::JSON)
        .header(auth("owner"))
        .body(r#"{"status":"accepted"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::NoContent);
}

#[test]
fn reviewer_may_read_proposals() {
    let (client, _db, event, proposal_id) = setup_org_event();

    let response = client
        .get(format!("/events/{}/proposals", event.id))
        .header(auth("reviewer"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body_str = response.into_string().unwrap();
    assert!(body_str.contains(&format!("\"{}\"", proposal_id)));

    // Speakers without any organizer rights must not list proposals.
    let response = client
        .get(format!("/events/{}/proposals", event.id))
        .header(auth("speaker"))
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);
}

#[test]
fn rating_round_trip() {
    let (client, _db, event, proposal_id) = setup_org_event();

    let response = client
        .put(format!(
            "/events/{}/proposals/{}/rating",
            event.id, proposal_id
        ))
        .header(ContentType::JSON)
        .header(auth("reviewer"))
        .body(r#"{"rating":3,"feeling":"neutral"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let response = client
        .get(format!("/events/{}/proposals/{}", event.id, proposal_id))
        .header(auth("reviewer"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let details: ocfp_boundary::ProposalDetails =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    let rating = details.rating.unwrap();
    assert_eq!(rating.rating, 3);
    assert_eq!(rating.feeling, "neutral");

    // "No opinion" deletes the stored row.
    let response = client
        .put(format!(
            "/events/{}/proposals/{}/rating",
            event.id, proposal_id
        ))
        .header(ContentType::JSON)
        .header(auth("reviewer"))
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let response = client
        .get(format!("/events/{}/proposals/{}", event.id, proposal_id))
        .header(auth("reviewer"))
        .dispatch();
    let details: ocfp_boundary::ProposalDetails =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(details.rating.is_none());
}

#[test]
fn rating_input_is_validated() {
    let (client, _db, event, proposal_id) = setup_org_event();

    for body in [
        r#"{"rating":6,"feeling":"neutral"}"#,
        r#"{"rating":3,"feeling":"ecstatic"}"#,
        r#"{"rating":3}"#,
    ] {
        let response = client
            .put(format!(
                "/events/{}/proposals/{}/rating",
                event.id, proposal_id
            ))
            .header(ContentType::JSON)
            .header(auth("reviewer"))
            .body(body)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }
}

#[test]
fn messages_belong_to_their_author() {
    let (client, _db, event, proposal_id) = setup_org_event();

    let response = client
        .post(format!(
            "/events/{}/proposals/{}/messages",
            event.id, proposal_id
        ))
        .header(ContentType::JSON)
        .header(auth("owner"))
        .body(r#"{"text":"please add an outline"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let message_id: String = serde_json::from_str(&response.into_string().unwrap()).unwrap();

    // The reviewer sees the message in the proposal details ...
    let response = client
        .get(format!("/events/{}/proposals/{}", event.id, proposal_id))
        .header(auth("reviewer"))
        .dispatch();
    let details: ocfp_boundary::ProposalDetails =
        serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(details.messages.len(), 1);
    assert_eq!(details.messages[0].text, "please add an outline");

    // ... but must not edit or delete it. The response does not reveal
    // whether the message exists at all.
    let response = client
        .patch(format!(
            "/events/{}/proposals/{}/messages/{}",
            event.id, proposal_id, message_id
        ))
        .header(ContentType::JSON)
        .header(auth("reviewer"))
        .body(r#"{"text":"hijacked"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .delete(format!(
            "/events/{}/proposals/{}/messages/{}",
            event.id, proposal_id, message_id
        ))
        .header(auth("reviewer"))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    // The author may do both.
    let response = client
        .patch(format!(
            "/events/{}/proposals/{}/messages/{}",
            event.id, proposal_id, message_id
        ))
        .header(ContentType::JSON)
        .header(auth("owner"))
        .body(r#"{"text":"updated"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let response = client
        .delete(format!(
            "/events/{}/proposals/{}/messages/{}",
            event.id, proposal_id, message_id
        ))
        .header(auth("owner"))
        .dispatch();
    assert_eq!(response.status(), Status::NoContent);
}

#[test]
fn empty_messages_are_rejected() {
    let (client, _db, event, proposal_id) = setup_org_event();

    let response = client
        .post(format!(
            "/events/{}/proposals/{}/messages",
            event.id, proposal_id
        ))
        .header(ContentType::JSON)
        .header(auth("owner"))
        .body(r#"{"text":"   "}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}
