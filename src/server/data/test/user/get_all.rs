use super::*;

/// Tests that users are listed alphabetically, including ones with invalid roles.
///
/// Expected: Ok(Vec<User>) ordered by name
#[tokio::test]
async fn lists_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Carla").build().await?;
    UserFactory::new(db).name("Ana").role("admin").build().await?;
    UserFactory::new(db).name("Bruno").role("gerente").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
    assert_eq!(users[0].role(), None);

    Ok(())
}
