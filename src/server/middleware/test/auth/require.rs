use super::*;

/// Tests the guard with a logged-in user.
///
/// Expected: Ok(User) matching the session
#[tokio::test]
async fn returns_user_from_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).require().await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.discord_id, user.discord_id);

    Ok(())
}

/// Tests the guard without a user in the session.
///
/// Expected: Err(AuthErr(UserNotInSession)), and `optional` returns None
#[tokio::test]
async fn fails_without_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);

    let result = guard.require().await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
    assert!(guard.optional().await?.is_none());

    Ok(())
}

/// Tests the guard when the session refers to a user that does not exist.
///
/// Expected: Err(AuthErr(UserNotInDatabase))
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(42).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));

    Ok(())
}
