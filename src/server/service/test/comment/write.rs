use super::*;

/// Tests commenting on a post.
///
/// Expected: Ok with the trimmed body stored as a top-level comment
#[tokio::test]
async fn creates_root_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let comment = CommentService::new(db)
        .create_root(post.id, user.id, "  Is the seat still free?  ")
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.user_id, user.id);
    assert_eq!(comment.body, "Is the seat still free?");
    assert!(!comment.is_reply());

    Ok(())
}

/// Tests rejected top-level comments.
///
/// Expected: BadRequest for a blank body, NotFound for an unknown post
#[tokio::test]
async fn rejects_invalid_root_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let service = CommentService::new(db);

    let blank = service.create_root(post.id, owner.id, "   ").await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let missing = service.create_root(404, owner.id, "hello").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests replying to a top-level comment.
///
/// Expected: Ok with the reply attached to its parent
#[tokio::test]
async fn replies_to_root_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let user = factory::create_user(db).await?;
    let root = factory::create_comment(db, post.id, user.id).await?;

    let reply = CommentService::new(db)
        .create_reply(post.id, root.id, owner.id, "Yes, one seat left")
        .await?;

    assert_eq!(reply.parent_comment_id, Some(root.id));
    assert_eq!(reply.post_id, post.id);

    Ok(())
}

/// Tests rejected replies.
///
/// Verifies replies to replies, to comments of another post and to deleted comments.
///
/// Expected: BadRequest, NotFound and Conflict respectively
#[tokio::test]
async fn rejects_invalid_replies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let (_, other_post) = factory::helpers::create_post_with_owner(db).await?;
    let root = factory::create_comment(db, post.id, owner.id).await?;
    let reply = CommentFactory::new(db, post.id, owner.id)
        .reply_to(root.id)
        .build()
        .await?;
    let deleted = CommentFactory::new(db, post.id, owner.id)
        .deleted()
        .build()
        .await?;

    let service = CommentService::new(db);

    let nested = service.create_reply(post.id, reply.id, owner.id, "x").await;
    assert!(matches!(nested, Err(AppError::BadRequest(_))));

    let wrong_post = service
        .create_reply(other_post.id, root.id, owner.id, "x")
        .await;
    assert!(matches!(wrong_post, Err(AppError::NotFound(_))));

    let to_deleted = service
        .create_reply(post.id, deleted.id, owner.id, "x")
        .await;
    assert!(matches!(to_deleted, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting comments with and without authorship.
///
/// Expected: Forbidden for another user, Ok for the author, NotFound afterwards
#[tokio::test]
async fn deletes_only_own_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let author = factory::create_user(db).await?;
    let comment = factory::create_comment(db, post.id, author.id).await?;

    let service = CommentService::new(db);

    let by_owner = service.delete(post.id, comment.id, owner.id).await;
    assert!(matches!(by_owner, Err(AppError::Forbidden(_))));

    service.delete(post.id, comment.id, author.id).await?;

    let again = service.delete(post.id, comment.id, author.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    let threads = service
        .list_by_post(post.id, CommentExpand::default())
        .await?;
    assert_eq!(threads.len(), 1);
    assert!(threads[0].comment.is_deleted());

    Ok(())
}
