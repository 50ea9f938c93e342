use super::*;

/// Tests listing the applications to a post as its owner.
///
/// Expected: Ok with all applications, or only those matching the status filter
#[tokio::test]
async fn owner_lists_applications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_application(db, post.id, first.id).await?;
    let accepted = PostApplicationFactory::new(db, post.id, second.id)
        .status("accepted")
        .build()
        .await?;
    let service = ApplicationService::new(db);

    let all = service.list_for_post(post.id, owner.id, None).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, accepted.id);

    let filtered = service
        .list_for_post(post.id, owner.id, Some("accepted"))
        .await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].applicant_id, second.id);

    Ok(())
}

/// Tests the rejections of `list_for_post`.
///
/// Expected: BadRequest for an unknown status, Forbidden for another user, NotFound for a
/// missing post
#[tokio::test]
async fn rejects_invalid_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let other = factory::create_user(db).await?;
    let service = ApplicationService::new(db);

    let result = service.list_for_post(post.id, owner.id, Some("maybe")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.list_for_post(post.id, other.id, None).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let result = service.list_for_post(404, owner.id, None).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests accepting a pending application.
///
/// Expected: Ok with status accepted, then Conflict when decided again
#[tokio::test]
async fn owner_accepts_pending_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;
    let application = factory::create_application(db, post.id, applicant.id).await?;
    let service = ApplicationService::new(db);

    let updated = service
        .set_status(application.id, owner.id, "accepted")
        .await?;
    assert_eq!(updated.status, ApplicationStatus::Accepted);

    let result = service
        .set_status(application.id, owner.id, "rejected")
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the rejections of `set_status`.
///
/// Expected: BadRequest for `pending`, NotFound for a missing application, Forbidden for a
/// user who does not own the post
#[tokio::test]
async fn rejects_invalid_status_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;
    let application = factory::create_application(db, post.id, applicant.id).await?;
    let service = ApplicationService::new(db);

    let result = service.set_status(application.id, owner.id, "pending").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.set_status(404, owner.id, "accepted").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .set_status(application.id, applicant.id, "accepted")
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
