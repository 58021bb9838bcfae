use super::*;

/// Tests creating a technician without a password.
///
/// Expected: Ok(User) with a lowercased e-mail and no password hash
#[tokio::test]
async fn creates_user_without_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(CreateUserDto {
            email: "Novo@Example.com ".to_string(),
            name: "Novo Técnico".to_string(),
            role: Role::Tecnico,
            password: Some("   ".to_string()),
        })
        .await?;

    assert_eq!(user.email, "novo@example.com");
    assert_eq!(user.role(), Some(Role::Tecnico));
    assert!(user.password_hash.is_none());

    Ok(())
}

/// Tests that an e-mail already in use is refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("existe@example.com")
        .build()
        .await?;

    let result = UserService::new(db)
        .create(CreateUserDto {
            email: "EXISTE@example.com".to_string(),
            name: "Outro".to_string(),
            role: Role::Auditor,
            password: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
