use super::*;

/// Tests creating a top-level comment and a reply to it.
///
/// Expected: Ok with the reply pointing at its parent
#[tokio::test]
async fn creates_comment_and_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let repo = CommentRepository::new(db);

    let root = repo
        .create(post.id, owner.id, None, "Who takes the night stint?".to_string())
        .await?;
    let reply = repo
        .create(post.id, owner.id, Some(root.id), "I can".to_string())
        .await?;

    assert_eq!(root.parent_comment_id, None);
    assert_eq!(reply.parent_comment_id, Some(root.id));
    assert_eq!(repo.find_by_id(reply.id).await?, Some(reply));

    Ok(())
}

/// Tests that a comment on an unknown post is rejected by the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn rejects_comment_on_unknown_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CommentRepository::new(db)
        .create(404, user.id, None, "hello".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests soft deletion by the author.
///
/// Expected: Ok(true) once, then Ok(false); the row stays with deleted_at set
#[tokio::test]
async fn soft_deletes_own_comment_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let comment = factory::create_comment(db, post.id, owner.id).await?;
    let repo = CommentRepository::new(db);

    assert!(repo.soft_delete(comment.id, owner.id).await?);
    assert!(!repo.soft_delete(comment.id, owner.id).await?);

    let stored = repo.find_by_id(comment.id).await?.unwrap();
    assert!(stored.deleted_at.is_some());
    assert_eq!(stored.body, comment.body);

    Ok(())
}

/// Tests that only the author can soft delete a comment.
///
/// Expected: Ok(false) for another user and the comment left live
#[tokio::test]
async fn soft_delete_ignores_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let other = factory::create_user(db).await?;
    let comment = factory::create_comment(db, post.id, owner.id).await?;
    let repo = CommentRepository::new(db);

    assert!(!repo.soft_delete(comment.id, other.id).await?);
    assert!(repo.find_by_id(comment.id).await?.unwrap().deleted_at.is_none());

    Ok(())
}

/// Tests that deleting a post removes its comments.
///
/// Expected: no comment rows left for the post
#[tokio::test]
async fn comments_are_removed_with_post() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let root = factory::create_comment(db, post.id, owner.id).await?;
    CommentFactory::new(db, post.id, owner.id)
        .reply_to(root.id)
        .build()
        .await?;

    entity::prelude::Post::delete_by_id(post.id).exec(db).await?;

    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}
