///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        uid -> Text,
        name -> Text,
        email -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Talks
///////////////////////////////////////////////////////////////////////

table! {
    talks (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Nullable<Text>,
        level -> Nullable<SmallInt>,
        language -> Nullable<Text>,
        references -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    talk_speakers (talk_rowid, user_rowid) {
        talk_rowid -> BigInt,
        user_rowid -> BigInt,
    }
}

joinable!(talk_speakers -> talks (talk_rowid));
joinable!(talk_speakers -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Organizations
///////////////////////////////////////////////////////////////////////

table! {
    organizations (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

table! {
    organization_members (org_rowid, user_rowid) {
        org_rowid -> BigInt,
        user_rowid -> BigInt,
        role -> SmallInt,
    }
}

joinable!(organization_members -> organizations (org_rowid));
joinable!(organization_members -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Nullable<Text>,
        kind -> SmallInt,
        owner_rowid -> BigInt,
        org_rowid -> Nullable<BigInt>,
        cfp_start -> Nullable<BigInt>,
        cfp_end -> Nullable<BigInt>,
        max_proposals -> Nullable<Integer>,
        formats_required -> Bool,
        categories_required -> Bool,
        created_at -> BigInt,
    }
}

joinable!(events -> users (owner_rowid));
joinable!(events -> organizations (org_rowid));

table! {
    event_formats (rowid) {
        rowid -> BigInt,
        event_rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

joinable!(event_formats -> events (event_rowid));

table! {
    event_categories (rowid) {
        rowid -> BigInt,
        event_rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

joinable!(event_categories -> events (event_rowid));

///////////////////////////////////////////////////////////////////////
// Proposals
///////////////////////////////////////////////////////////////////////

table! {
    proposals (rowid) {
        rowid -> BigInt,
        id -> Text,
        talk_rowid -> BigInt,
        event_rowid -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        level -> Nullable<SmallInt>,
        language -> Nullable<Text>,
        references -> Nullable<Text>,
        comments -> Nullable<Text>,
        status -> SmallInt,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(proposals -> talks (talk_rowid));
joinable!(proposals -> events (event_rowid));

table! {
    proposal_speakers (proposal_rowid, user_rowid) {
        proposal_rowid -> BigInt,
        user_rowid -> BigInt,
    }
}

joinable!(proposal_speakers -> proposals (proposal_rowid));
joinable!(proposal_speakers -> users (user_rowid));

table! {
    proposal_formats (proposal_rowid, format_id) {
        proposal_rowid -> BigInt,
        format_id -> Text,
    }
}

joinable!(proposal_formats -> proposals (proposal_rowid));

table! {
    proposal_categories (proposal_rowid, category_id) {
        proposal_rowid -> BigInt,
        category_id -> Text,
    }
}

joinable!(proposal_categories -> proposals (proposal_rowid));

///////////////////////////////////////////////////////////////////////
// Ratings
///////////////////////////////////////////////////////////////////////

table! {
    ratings (user_rowid, proposal_rowid) {
        user_rowid -> BigInt,
        proposal_rowid -> BigInt,
        value -> SmallInt,
        feeling -> SmallInt,
    }
}

joinable!(ratings -> users (user_rowid));
joinable!(ratings -> proposals (proposal_rowid));

///////////////////////////////////////////////////////////////////////
// Messages
///////////////////////////////////////////////////////////////////////

table! {
    messages (rowid) {
        rowid -> BigInt,
        id -> Text,
        proposal_rowid -> BigInt,
        author_rowid -> BigInt,
        channel -> SmallInt,
        text -> Text,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
    }
}

joinable!(messages -> proposals (proposal_rowid));
joinable!(messages -> users (author_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    users,
    talks,
    talk_speakers,
    organizations,
    organization_members,
    events,
    event_formats,
    event_categories,
    proposals,
    proposal_speakers,
    proposal_formats,
    proposal_categories,
    ratings,
    messages,
);
