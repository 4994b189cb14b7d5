/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Validation, defaults and conversions of the API bodies

use common::schemas::*;
use entity::{item, job_title, user, volunteer};
use serde_json::{Value, json};

fn without(value: &Value, field: &str) -> Value {
    let mut value = value.clone();
    value.as_object_mut().unwrap().remove(field);
    value
}

#[test]
fn test_item_create_accepts_null_description() {
    let item: ItemCreate =
        serde_json::from_value(json!({"title": "Book", "description": null})).unwrap();

    assert_eq!(item.title, "Book");
    assert_eq!(item.description, None);
}

#[test]
fn test_item_create_description_defaults_to_none() {
    let item: ItemCreate = serde_json::from_value(json!({"title": "Book"})).unwrap();
    assert_eq!(item.description, None);
}

#[test]
fn test_item_create_requires_title() {
    let result = serde_json::from_value::<ItemCreate>(json!({"description": "paperback"}));
    assert!(result.is_err());
}

#[test]
fn test_item_create_rejects_wrong_type() {
    let result = serde_json::from_value::<ItemCreate>(json!({"title": 42}));
    assert!(result.is_err());

    let result = serde_json::from_value::<ItemCreate>(json!({"title": "Book", "description": 1}));
    assert!(result.is_err());
}

#[test]
fn test_user_create_valid() {
    let user: UserCreate = serde_json::from_value(json!({
        "email": "a@b.com",
        "username": "a",
        "password": "x"
    }))
    .unwrap();

    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.username, "a");
    assert_eq!(user.password, "x");
}

#[test]
fn test_user_create_requires_every_field() {
    let full = json!({"email": "a@b.com", "username": "a", "password": "x"});

    for field in ["email", "username", "password"] {
        let result = serde_json::from_value::<UserCreate>(without(&full, field));
        assert!(result.is_err(), "missing {} should be rejected", field);
    }
}

#[test]
fn test_user_create_debug_hides_password() {
    let user = UserCreate {
        email: "a@b.com".to_string(),
        username: "a".to_string(),
        password: "hunter2".to_string(),
    };

    let debug = format!("{:?}", user);
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("[redacted]"));
}

#[test]
fn test_user_items_default_to_empty() {
    let user: User =
        serde_json::from_value(json!({"email": "a@b.com", "id": 1, "is_active": true})).unwrap();

    assert!(user.items.is_empty());
}

#[test]
fn test_user_round_trip() {
    let user = User {
        email: "a@b.com".to_string(),
        id: 7,
        is_active: false,
        items: vec![
            Item {
                title: "Book".to_string(),
                description: Some("paperback".to_string()),
                id: 1,
                owner_id: 7,
            },
            Item {
                title: "Lamp".to_string(),
                description: None,
                id: 2,
                owner_id: 7,
            },
        ],
    };

    let json = serde_json::to_string(&user).unwrap();
    let parsed: User = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, user);
}

#[test]
fn test_job_title_round_trip() {
    let job_title = JobTitle {
        id: 3,
        title: "Designer".to_string(),
        is_active: true,
    };

    let value = serde_json::to_value(&job_title).unwrap();
    assert_eq!(value, json!({"id": 3, "title": "Designer", "is_active": true}));

    let parsed: JobTitle = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, job_title);
}

#[test]
fn test_job_title_requires_is_active() {
    let result = serde_json::from_value::<JobTitle>(json!({"id": 3, "title": "Designer"}));
    assert!(result.is_err());
}

#[test]
fn test_volunteer_create_is_active_defaults_to_true() {
    let volunteer: VolunteerCreate = serde_json::from_value(json!({
        "name": "Vera",
        "linkedin": "https://linkedin.com/in/vera",
        "email": "v@x.com",
        "jobtitle_id": 1
    }))
    .unwrap();

    assert_eq!(volunteer.is_active, Some(true));
}

#[test]
fn test_volunteer_create_keeps_explicit_null() {
    let volunteer: VolunteerCreate = serde_json::from_value(json!({
        "name": "Vera",
        "linkedin": "https://linkedin.com/in/vera",
        "email": "v@x.com",
        "is_active": null,
        "jobtitle_id": 1
    }))
    .unwrap();

    assert_eq!(volunteer.is_active, None);
}

#[test]
fn test_volunteer_create_missing_name_fails() {
    let result = serde_json::from_value::<VolunteerCreate>(json!({
        "linkedin": "...",
        "email": "v@x.com",
        "jobtitle_id": 1
    }));

    assert!(result.is_err());
}

#[test]
fn test_volunteer_create_requires_every_field() {
    let full = json!({
        "name": "Vera",
        "linkedin": "...",
        "email": "v@x.com",
        "jobtitle_id": 1
    });

    for field in ["name", "linkedin", "email", "jobtitle_id"] {
        let result = serde_json::from_value::<VolunteerCreate>(without(&full, field));
        assert!(result.is_err(), "missing {} should be rejected", field);
    }
}

#[test]
fn test_volunteer_create_rejects_string_jobtitle_id() {
    let result = serde_json::from_value::<VolunteerCreate>(json!({
        "name": "Vera",
        "linkedin": "...",
        "email": "v@x.com",
        "jobtitle_id": "1"
    }));

    assert!(result.is_err());
}

#[test]
fn test_volunteer_optional_fields_default_to_none() {
    let volunteer: Volunteer = serde_json::from_value(json!({
        "name": "Vera",
        "linkedin": "...",
        "id": 4,
        "jobtitle_id": 1
    }))
    .unwrap();

    assert_eq!(volunteer.is_active, None);
    assert_eq!(volunteer.masked_email, None);

    let listed: VolunteerList = serde_json::from_value(json!({
        "name": "Vera",
        "linkedin": "...",
        "id": 4,
        "jobtitle_id": 1
    }))
    .unwrap();

    assert_eq!(listed.masked_email, None);
}

#[test]
fn test_volunteer_round_trip() {
    let volunteer = Volunteer {
        name: "Vera".to_string(),
        linkedin: "https://linkedin.com/in/vera".to_string(),
        is_active: Some(false),
        id: 4,
        jobtitle_id: 2,
        masked_email: Some("v***@x.com".to_string()),
    };

    let json = serde_json::to_string(&volunteer).unwrap();
    let parsed: Volunteer = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, volunteer);
}

#[test]
fn test_volunteer_list_round_trip() {
    let listed = VolunteerList {
        name: "Vera".to_string(),
        linkedin: "https://linkedin.com/in/vera".to_string(),
        is_active: None,
        id: 4,
        jobtitle_id: 2,
        masked_email: None,
    };

    let json = serde_json::to_string(&listed).unwrap();
    let parsed: VolunteerList = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, listed);
}

#[test]
fn test_item_round_trip() {
    let item = Item {
        title: "Book".to_string(),
        description: Some("paperback".to_string()),
        id: 10,
        owner_id: 1,
    };

    let json = serde_json::to_string(&item).unwrap();
    let parsed: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, item);
}

#[test]
fn test_token_round_trip() {
    let token = Token::bearer("abc.def.ghi".to_string());

    let json = serde_json::to_string(&token).unwrap();
    let parsed: Token = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, token);
}

#[test]
fn test_user_auth_and_user_in_db_round_trip() {
    let user_in_db = UserInDB {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        is_active: Some(true),
        hashed_password: "$argon2id$v=19$hash".to_string(),
    };

    let json = serde_json::to_string(&user_in_db).unwrap();
    let parsed: UserInDB = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, user_in_db);

    let user_auth = UserAuth::from(user_in_db);
    let json = serde_json::to_string(&user_auth).unwrap();
    let parsed: UserAuth = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, user_auth);
}

#[test]
fn test_token_bearer() {
    let token = Token::bearer("abc".to_string());
    assert_eq!(token.token_type, "bearer");

    let value = serde_json::to_value(&token).unwrap();
    assert_eq!(value, json!({"access_token": "abc", "token_type": "bearer"}));
}

#[test]
fn test_token_data_username_defaults_to_none() {
    let token_data: TokenData = serde_json::from_value(json!({})).unwrap();
    assert_eq!(token_data, TokenData::default());
    assert_eq!(token_data.username, None);
}

#[test]
fn test_user_auth_is_active_optional() {
    let user: UserAuth =
        serde_json::from_value(json!({"username": "alice", "email": "alice@example.com"}))
            .unwrap();
    assert_eq!(user.is_active, None);

    let result = serde_json::from_value::<UserAuth>(json!({"username": "alice"}));
    assert!(result.is_err());
}

#[test]
fn test_user_in_db_requires_hashed_password() {
    let result = serde_json::from_value::<UserInDB>(json!({
        "username": "alice",
        "email": "alice@example.com",
        "is_active": true
    }));

    assert!(result.is_err());
}

#[test]
fn test_item_from_model() {
    let item = Item::from(item::Model {
        id: 1,
        title: "Book".to_string(),
        description: None,
        owner_id: 9,
    });

    assert_eq!(item.id, 1);
    assert_eq!(item.owner_id, 9);
    assert_eq!(item.description, None);
}

#[test]
fn test_user_from_model_with_items() {
    let model = user::Model {
        id: 9,
        email: "alice@example.com".to_string(),
        username: "alice".to_string(),
        hashed_password: "hash".to_string(),
        is_active: true,
    };
    let items = vec![item::Model {
        id: 1,
        title: "Book".to_string(),
        description: Some("paperback".to_string()),
        owner_id: 9,
    }];

    let user = User::from((model.clone(), items));
    assert_eq!(user.id, 9);
    assert_eq!(user.items.len(), 1);
    assert_eq!(user.items[0].title, "Book");

    let value = serde_json::to_value(User::from(model)).unwrap();
    assert_eq!(value["items"], json!([]));
    assert!(value.get("hashed_password").is_none());
}

#[test]
fn test_user_in_db_and_user_auth_from_model() {
    let model = user::Model {
        id: 9,
        email: "alice@example.com".to_string(),
        username: "alice".to_string(),
        hashed_password: "hash".to_string(),
        is_active: false,
    };

    let user_in_db = UserInDB::from(model.clone());
    assert_eq!(user_in_db.hashed_password, "hash");
    assert_eq!(user_in_db.is_active, Some(false));
    assert!(format!("{:?}", user_in_db).contains("[redacted]"));

    let user_auth = UserAuth::from(user_in_db);
    assert_eq!(user_auth, UserAuth::from(model));
    assert_eq!(user_auth.username, "alice");
}

#[test]
fn test_job_title_from_model() {
    let job_title = JobTitle::from(job_title::Model {
        id: 2,
        title: "Designer".to_string(),
        is_active: true,
    });

    assert_eq!(job_title.title, "Designer");
}

#[test]
fn test_volunteer_from_model_masks_email() {
    let model = volunteer::Model {
        id: 4,
        name: "Vera".to_string(),
        linkedin: "https://linkedin.com/in/vera".to_string(),
        email: "vera@example.com".to_string(),
        is_active: Some(true),
        jobtitle_id: 2,
    };

    let volunteer = Volunteer::from(model.clone());
    assert_eq!(volunteer.masked_email.as_deref(), Some("v***@example.com"));

    let value = serde_json::to_value(&volunteer).unwrap();
    assert!(value.get("email").is_none());

    let listed = VolunteerList::from(model);
    assert_eq!(listed.masked_email, volunteer.masked_email);
    assert_eq!(listed.id, volunteer.id);
}
