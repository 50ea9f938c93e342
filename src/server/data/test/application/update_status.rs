use super::*;

/// Tests changing the status of an application.
///
/// Expected: Ok(Some) with the new status and a newer updated_at
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;
    let application = factory::create_application(db, post.id, applicant.id).await?;

    let updated = PostApplicationRepository::new(db)
        .update_status(application.id, ApplicationStatus::Accepted)
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Accepted);
    assert_ne!(updated.updated_at, application.updated_at);
    assert_eq!(updated.created_at, application.created_at);

    Ok(())
}

/// Tests updating an application that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostApplicationRepository::new(db)
        .update_status(999, ApplicationStatus::Rejected)
        .await?;

    assert!(result.is_none());

    Ok(())
}
