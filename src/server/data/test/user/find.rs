use super::*;

/// Tests looking up a user by local id and by Discord id.
///
/// Expected: both lookups return the same user
#[tokio::test]
async fn finds_user_by_either_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let by_id = repo.find_by_id(created.id).await?.unwrap();
    let by_discord_id = repo.find_by_discord_id(&created.discord_id).await?.unwrap();

    assert_eq!(by_id, by_discord_id);
    assert_eq!(by_id.id, created.id);

    Ok(())
}

/// Tests looking up ids that do not exist.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_discord_id("999").await?.is_none());

    Ok(())
}
