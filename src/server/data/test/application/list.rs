use super::*;

/// Tests listing the applications of a post.
///
/// Verifies newest-first ordering, the optional status filter and that applications to
/// other posts are excluded.
///
/// Expected: Ok with the post's applications in the expected order
#[tokio::test]
async fn lists_applications_for_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_owner(db).await?;
    let (_, other_post) = factory::helpers::create_post_with_owner(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let older = factory::create_application(db, post.id, first.id).await?;
    let newer = factory::post_application::PostApplicationFactory::new(db, post.id, second.id)
        .status("accepted")
        .build()
        .await?;
    factory::create_application(db, other_post.id, first.id).await?;

    let repo = PostApplicationRepository::new(db);

    let all = repo.list_for_post(post.id, None).await?;
    let ids: Vec<i32> = all.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let accepted = repo
        .list_for_post(post.id, Some(ApplicationStatus::Accepted))
        .await?;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, newer.id);

    Ok(())
}

/// Tests listing the applications a user made.
///
/// Expected: Ok with only that user's applications
#[tokio::test]
async fn lists_applications_for_applicant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post_a) = factory::helpers::create_post_with_owner(db).await?;
    let (_, post_b) = factory::helpers::create_post_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;
    let someone_else = factory::create_user(db).await?;
    factory::create_application(db, post_a.id, applicant.id).await?;
    factory::create_application(db, post_b.id, applicant.id).await?;
    factory::create_application(db, post_a.id, someone_else.id).await?;

    let mine = PostApplicationRepository::new(db)
        .list_for_applicant(applicant.id)
        .await?;

    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|a| a.applicant_id == applicant.id));
    assert_eq!(mine[0].post_id, post_b.id);

    Ok(())
}
