use super::*;

/// Tests listing threads without expansion.
///
/// Expected: top-level comments only, no authors or replies attached
#[tokio::test]
async fn lists_threads_without_expand() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let root = factory::create_comment(db, post.id, owner.id).await?;
    CommentFactory::new(db, post.id, owner.id)
        .reply_to(root.id)
        .build()
        .await?;

    let threads = CommentService::new(db)
        .list_by_post(post.id, CommentExpand::default())
        .await?;

    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].comment.id, root.id);
    assert!(threads[0].author.is_none());
    assert!(threads[0].replies.is_empty());

    Ok(())
}

/// Tests listing threads with replies and authors expanded.
///
/// Verifies a deleted top-level comment stays in the list masked and without its replies.
///
/// Expected: live thread with replies and authors, deleted thread masked and empty
#[tokio::test]
async fn expands_replies_and_authors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let driver = factory::create_user(db).await?;

    let live = factory::create_comment(db, post.id, driver.id).await?;
    let reply = CommentFactory::new(db, post.id, owner.id)
        .reply_to(live.id)
        .body("Welcome aboard")
        .build()
        .await?;
    let gone = CommentFactory::new(db, post.id, driver.id)
        .body("Wrong thread")
        .build()
        .await?;
    CommentFactory::new(db, post.id, owner.id)
        .reply_to(gone.id)
        .build()
        .await?;
    CommentService::new(db)
        .delete(post.id, gone.id, driver.id)
        .await?;

    let threads = CommentService::new(db)
        .list_by_post(post.id, CommentExpand::parse("user,replies"))
        .await?;

    assert_eq!(threads.len(), 2);

    let deleted = &threads[0];
    assert_eq!(deleted.comment.id, gone.id);
    assert!(deleted.replies.is_empty());
    assert_eq!(deleted.clone().into_dto().body, DELETED_BODY);

    let thread = &threads[1];
    assert_eq!(thread.comment.id, live.id);
    assert_eq!(thread.author.as_ref().map(|u| u.id), Some(driver.id));
    assert_eq!(thread.replies.len(), 1);
    assert_eq!(thread.replies[0].comment.id, reply.id);
    assert_eq!(
        thread.replies[0].author.as_ref().map(|u| u.id),
        Some(owner.id)
    );

    Ok(())
}

/// Tests listing comments of a post that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_listing_unknown_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db)
        .list_by_post(404, CommentExpand::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
