use super::*;

/// Tests listing the top-level comments of a post.
///
/// Verifies replies, deleted state and other posts' comments are handled.
///
/// Expected: only top-level comments of the post, newest first, deleted ones included
#[tokio::test]
async fn lists_roots_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let (_, other_post) = factory::helpers::create_post_with_owner(db).await?;

    let older = factory::create_comment(db, post.id, owner.id).await?;
    CommentFactory::new(db, post.id, owner.id)
        .reply_to(older.id)
        .build()
        .await?;
    let deleted = CommentFactory::new(db, post.id, owner.id)
        .deleted()
        .build()
        .await?;
    factory::create_comment(db, other_post.id, owner.id).await?;

    let roots = CommentRepository::new(db).list_roots(post.id).await?;

    let ids: Vec<i32> = roots.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![deleted.id, older.id]);

    Ok(())
}

/// Tests loading replies for several parents at once.
///
/// Expected: replies oldest first, none for a deleted parent
#[tokio::test]
async fn lists_replies_of_live_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, post) = factory::helpers::create_post_with_owner(db).await?;
    let live = factory::create_comment(db, post.id, owner.id).await?;
    let gone = CommentFactory::new(db, post.id, owner.id)
        .deleted()
        .build()
        .await?;

    let first = CommentFactory::new(db, post.id, owner.id)
        .reply_to(live.id)
        .build()
        .await?;
    let second = CommentFactory::new(db, post.id, owner.id)
        .reply_to(live.id)
        .build()
        .await?;
    CommentFactory::new(db, post.id, owner.id)
        .reply_to(gone.id)
        .build()
        .await?;

    let replies = CommentRepository::new(db)
        .list_replies(&[live.id, gone.id])
        .await?;

    let ids: Vec<i32> = replies.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(CommentRepository::new(db).list_replies(&[]).await?.is_empty());

    Ok(())
}
