use super::*;

fn setup_payload(code: &str) -> SetupDto {
    SetupDto {
        code: code.to_string(),
        email: "Chefe@Example.com".to_string(),
        name: " Chefe ".to_string(),
        password: "segredo1".to_string(),
    }
}

/// Tests creating the first manager with the setup code.
///
/// Expected: Ok(SessionUser) with role Gerente and a stored password hash
#[tokio::test]
async fn creates_first_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = OneTimeCodeService::new();
    let code = codes.generate_setup_code().await;

    let manager = AuthService::new(db, &codes)
        .setup(setup_payload(&code))
        .await?;

    assert_eq!(manager.role, Role::Gerente);
    assert_eq!(manager.email, "chefe@example.com");
    assert_eq!(manager.name, "Chefe");

    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_id(manager.id)
        .await?
        .unwrap();
    assert!(verify_password("segredo1", stored.password_hash.as_deref().unwrap()).await?);

    Ok(())
}

/// Tests that setup is closed once a manager exists.
///
/// Expected: Err(AuthError::SetupUnavailable)
#[tokio::test]
async fn unavailable_when_manager_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).role("gerente").build().await?;

    let codes = OneTimeCodeService::new();
    let code = codes.generate_setup_code().await;

    let result = AuthService::new(db, &codes)
        .setup(setup_payload(&code))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SetupUnavailable))
    ));

    Ok(())
}

/// Tests that a wrong setup code is refused.
///
/// Expected: Err(AuthError::SetupUnavailable)
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = OneTimeCodeService::new();
    codes.generate_setup_code().await;

    let result = AuthService::new(db, &codes)
        .setup(setup_payload("wrong-code"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SetupUnavailable))
    ));

    Ok(())
}

/// Tests that an e-mail already taken by a technician leaves the setup code usable.
///
/// Expected: Err(AppError::BadRequest), then Ok(SessionUser) with the same code and another
/// e-mail
#[tokio::test]
async fn duplicate_email_keeps_setup_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("chefe@example.com")
        .role("tecnico")
        .build()
        .await?;

    let codes = OneTimeCodeService::new();
    let code = codes.generate_setup_code().await;
    let service = AuthService::new(db, &codes);

    let result = service.setup(setup_payload(&code)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let manager = service
        .setup(SetupDto {
            email: "gestao@example.com".to_string(),
            ..setup_payload(&code)
        })
        .await?;
    assert_eq!(manager.role, Role::Gerente);

    Ok(())
}
