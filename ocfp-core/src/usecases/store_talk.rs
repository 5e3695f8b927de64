use std::str::FromStr;

use super::{authorize::resolve_user, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewTalk {
    pub title       : String,
    pub description : Option<String>,
    pub level       : Option<String>,
    pub language    : Option<String>,
    pub references  : Option<String>,
}

fn parse_talk_fields(
    new_talk: NewTalk,
) -> Result<(
    String,
    Option<String>,
    Option<TalkLevel>,
    Option<String>,
    Option<String>,
)> {
    let NewTalk {
        title,
        description,
        level,
        language,
        references,
    } = new_talk;
    let title = title.trim().to_owned();
    if title.is_empty() {
        return Err(Error::Title);
    }
    let level = level
        .filter(|level| !level.is_empty())
        .map(|level| TalkLevel::from_str(&level).map_err(|_| Error::TalkLevel))
        .transpose()?;
    Ok((title, description, level, language, references))
}

pub fn create_talk<R>(repo: &R, uid: &str, new_talk: NewTalk) -> Result<Talk>
where
    R: UserRepo + TalkRepo,
{
    let user = resolve_user(repo, uid)?;
    let (title, description, level, language, references) = parse_talk_fields(new_talk)?;
    let talk = Talk {
        id: Id::new(),
        title,
        description,
        level,
        language,
        references,
        speakers: vec![user.id],
        created_at: Timestamp::now(),
    };
    log::debug!("Storing newly created talk: {:?}", talk);
    repo.create_talk(talk.clone())?;
    Ok(talk)
}

pub fn update_talk<R>(repo: &R, uid: &str, talk_id: &str, new_talk: NewTalk) -> Result<Talk>
where
    R: UserRepo + TalkRepo,
{
    let user = resolve_user(repo, uid)?;
    let mut talk = super::authorize::get_talk(repo, talk_id)?;
    if !talk.has_speaker(&user.id) {
        return Err(Error::Forbidden);
    }
    let (title, description, level, language, references) = parse_talk_fields(new_talk)?;
    talk.title = title;
    talk.description = description;
    talk.level = level;
    talk.language = language;
    talk.references = references;
    log::debug!("Storing updated talk: {:?}", talk);
    repo.update_talk(&talk)?;
    Ok(talk)
}

pub fn get_own_talk<R>(repo: &R, uid: &str, talk_id: &str) -> Result<Talk>
where
    R: UserRepo + TalkRepo,
{
    let user = resolve_user(repo, uid)?;
    let talk = super::authorize::get_talk(repo, talk_id)?;
    if !talk.has_speaker(&user.id) {
        return Err(Error::Forbidden);
    }
    Ok(talk)
}

pub fn get_own_talks<R>(repo: &R, uid: &str) -> Result<Vec<Talk>>
where
    R: UserRepo + TalkRepo,
{
    let user = resolve_user(repo, uid)?;
    Ok(repo.talks_of_speaker(user.id.as_str())?)
}
