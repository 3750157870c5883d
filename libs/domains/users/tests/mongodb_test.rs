//! Integration tests against real MongoDB via testcontainers.
//!
//! Run with a Docker daemon available:
//! `cargo test -p domain_users -- --ignored`

use domain_users::{
    CreateUser, MongoUserRepository, PublicUser, UserCriteria, UserError, UserRole, UserService,
};
use mongodb::bson::Document;
use test_utils::{assertions::assert_some, TestDataBuilder, TestMongo};

async fn service(mongo: &TestMongo) -> UserService<MongoUserRepository> {
    let repository = MongoUserRepository::new(mongo.database());
    repository
        .create_indexes()
        .await
        .expect("index creation should succeed");
    UserService::new(repository)
}

fn by_email(email: &str) -> UserCriteria {
    UserCriteria {
        email: Some(email.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_create_find_exists_roundtrip() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let builder = TestDataBuilder::from_test_name("create_find_exists");

    let email = builder.email("roundtrip");
    let created = service
        .create(CreateUser {
            email: email.clone(),
            password: "pw1".to_string(),
        })
        .await
        .unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.role, vec![UserRole::Guest]);

    let found = service.find_by_attrs(by_email(&email)).await.unwrap();
    let found = assert_some(found, "created user should be findable");
    assert_eq!(found.id, created.id);
    assert_eq!(found.v_code, created.v_code);

    assert!(service.exists(by_email(&email)).await.unwrap());
    assert!(!service.exists(by_email("nobody@example.com")).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_unique_index_rejects_duplicate_email() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let builder = TestDataBuilder::from_test_name("duplicate_email");

    let email = builder.email("duplicate");
    service
        .create(CreateUser {
            email: email.clone(),
            password: "pw1".to_string(),
        })
        .await
        .unwrap();

    let result = service
        .create(CreateUser {
            email: email.clone(),
            password: "pw2".to_string(),
        })
        .await;
    assert!(
        matches!(result, Err(UserError::DuplicateEmail(ref e)) if e == &email),
        "expected DuplicateEmail, got {:?}",
        result
    );

    // Exactly one document with that email survives
    let count = mongo
        .database()
        .collection::<Document>("users")
        .count_documents(mongodb::bson::doc! { "email": &email })
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_lookup_by_id_and_verification_code() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let builder = TestDataBuilder::from_test_name("criteria_lookup");

    let created = service
        .create(CreateUser {
            email: builder.email("criteria"),
            password: "pw".to_string(),
        })
        .await
        .unwrap();

    let by_id = UserCriteria {
        id: created.id,
        ..Default::default()
    };
    let found = service.find_by_attrs(by_id).await.unwrap();
    assert_eq!(assert_some(found, "lookup by id").id, created.id);

    let by_code = UserCriteria {
        v_code: Some(created.v_code.clone()),
        email: Some(created.email.clone()),
        ..Default::default()
    };
    let found = service.find_by_attrs(by_code).await.unwrap();
    assert_eq!(assert_some(found, "lookup by code").id, created.id);
}

#[tokio::test]
#[ignore] // Requires a Docker daemon
async fn test_secrets_are_stored_but_never_projected() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let builder = TestDataBuilder::from_test_name("secret_projection");

    let email = builder.email("secrets");
    let created = service
        .create(CreateUser {
            email: email.clone(),
            password: "plaintext".to_string(),
        })
        .await
        .unwrap();

    // The stored document carries the hash and the verification secrets
    let raw = mongo
        .database()
        .collection::<Document>("users")
        .find_one(mongodb::bson::doc! { "email": &email })
        .await
        .unwrap()
        .unwrap();
    assert!(raw.contains_key("password"));
    assert!(raw.contains_key("vToken"));
    assert!(raw.contains_key("vCode"));
    assert_ne!(raw.get_str("password").unwrap(), "plaintext");

    // The projection carries none of them
    let json = serde_json::to_value(PublicUser::from(&created)).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("vToken"));
    assert!(!object.contains_key("vCode"));
}
