use super::*;

/// Tests creating a user with a password hash.
///
/// Verifies that the stored role is the canonical role string and that the
/// hash is kept as given.
///
/// Expected: Ok(User) with role "auditor"
#[tokio::test]
async fn creates_user_with_role_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "auditora@example.com".to_string(),
            name: "Auditora".to_string(),
            role: Role::Auditor,
            password_hash: Some("$argon2id$fake".to_string()),
        })
        .await?;

    assert_eq!(user.email, "auditora@example.com");
    assert_eq!(user.role, "auditor");
    assert_eq!(user.role(), Some(Role::Auditor));
    assert_eq!(user.password_hash.as_deref(), Some("$argon2id$fake"));

    Ok(())
}

/// Tests that e-mails are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        email: "dup@example.com".to_string(),
        name: "Primeiro".to_string(),
        role: Role::Tecnico,
        password_hash: None,
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
