use super::*;

/// Tests inserting a user that does not exist yet.
///
/// Expected: Ok with a new user carrying the Discord data
#[tokio::test]
async fn inserts_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "Max".to_string(),
            avatar: Some("abc".to_string()),
        })
        .await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.name, "Max");
    assert_eq!(user.avatar.as_deref(), Some("abc"));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests upserting a user whose Discord id is already stored.
///
/// Verifies the existing row is updated in place rather than duplicated.
///
/// Expected: Ok with the same local id and the new name and avatar
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .discord_id("42")
        .name("Old Name")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "42".to_string(),
            name: "New Name".to_string(),
            avatar: None,
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.avatar, None);
    assert_eq!(user.created_at, existing.created_at);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
