use super::*;

/// Tests creating a post through the service.
///
/// Expected: Ok with the stored post and its sets read back
#[tokio::test]
async fn creates_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let car = factory::create_car(db, "Porsche 963").await?;

    let mut params = create_params(owner.id);
    params.associations.car_ids = vec![car.id];

    let result = PostService::new(db).create(params).await?;

    assert_eq!(result.post.user_id, owner.id);
    assert_eq!(result.post.status, PostStatus::Open);
    assert_eq!(result.post.min_license_level, LicenseLevel::C);
    assert_eq!(result.associations.car_ids, vec![car.id]);

    Ok(())
}

/// Tests that a failing association insert rolls back the whole create.
///
/// Expected: Err with no post row left behind
#[tokio::test]
async fn rolls_back_create_on_unknown_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let mut params = create_params(owner.id);
    params.associations.car_ids = vec![9999];

    let result = PostService::new(db).create(params).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Post::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating a post owned by the caller.
///
/// Expected: Ok with the changed fields applied
#[tokio::test]
async fn updates_own_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let post = factory::create_post(db, owner.id).await?;

    let result = PostService::new(db)
        .update(
            owner.id,
            UpdatePostParams {
                id: post.id,
                title: Some("Renamed".to_string()),
                status: Some(PostStatus::Filled),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(result.post.title, "Renamed");
    assert_eq!(result.post.status, PostStatus::Filled);

    Ok(())
}

/// Tests that a failing association replace rolls back the whole update.
///
/// Verifies the field change and the already-replaced categories are undone when a later
/// car insert fails.
///
/// Expected: Err with title, categories and cars unchanged
#[tokio::test]
async fn rolls_back_update_on_unknown_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let car = factory::create_car(db, "Porsche 963").await?;

    let mut params = create_params(owner.id);
    params.associations.car_ids = vec![car.id];

    let service = PostService::new(db);
    let created = service.create(params).await?;

    let result = service
        .update(
            owner.id,
            UpdatePostParams {
                id: created.post.id,
                title: Some("Renamed".to_string()),
                categories: Some(vec![]),
                car_ids: Some(vec![9999]),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    let stored = service
        .get_by_id(created.post.id, ExpandSet::default())
        .await?
        .unwrap();
    assert_eq!(stored.post.title, "Daytona 24 team");
    assert_eq!(stored.associations.categories, vec![PostCategory::SportsCar]);
    assert_eq!(stored.associations.car_ids, vec![car.id]);

    Ok(())
}

/// Tests updating another user's post.
///
/// Expected: Err(Forbidden) and the post unchanged
#[tokio::test]
async fn rejects_update_by_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;

    let result = PostService::new(db)
        .update(
            intruder.id,
            UpdatePostParams {
                id: post.id,
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let stored = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert_eq!(stored.map(|p| p.title), Some(post.title));

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_update_of_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = PostService::new(db)
        .update(
            owner.id,
            UpdatePostParams {
                id: 404,
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting posts with and without ownership.
///
/// Expected: Forbidden for another user, Ok for the owner, NotFound afterwards
#[tokio::test]
async fn deletes_only_own_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;
    let service = PostService::new(db);

    let result = service.delete(intruder.id, post.id).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    service.delete(owner.id, post.id).await?;
    assert!(service.get_by_id(post.id, ExpandSet::default()).await?.is_none());

    let result = service.delete(owner.id, post.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
