use super::*;

/// Tests listing owned posts and posts the user was accepted to.
///
/// Expected: owned posts by owner, accepted ones by applicant; pending applications ignored
#[tokio::test]
async fn lists_owned_and_member_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, member, post) = factory::helpers::create_team(db).await?;
    let (_, pending_post) = factory::helpers::create_post_with_owner(db).await?;
    factory::create_application(db, pending_post.id, member.id).await?;

    let repo = TeamRepository::new(db);

    let owned: Vec<i32> = repo
        .owned_posts(owner.id)
        .await?
        .iter()
        .map(|p| p.id)
        .collect();
    let joined: Vec<i32> = repo
        .member_posts(member.id)
        .await?
        .iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(owned, vec![post.id]);
    assert_eq!(joined, vec![post.id]);
    assert!(repo.member_posts(owner.id).await?.is_empty());

    Ok(())
}

/// Tests listing the accepted applicants of a post.
///
/// Expected: accepted applications with their users, in acceptance order
#[tokio::test]
async fn lists_accepted_members_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first, post) = factory::helpers::create_team(db).await?;
    let second = factory::create_user(db).await?;
    let rejected = factory::create_user(db).await?;
    PostApplicationFactory::new(db, post.id, second.id)
        .status("accepted")
        .build()
        .await?;
    PostApplicationFactory::new(db, post.id, rejected.id)
        .status("rejected")
        .build()
        .await?;

    let members = TeamRepository::new(db).accepted_members(post.id).await?;

    let users: Vec<i32> = members
        .iter()
        .filter_map(|(_, user)| user.as_ref().map(|u| u.id))
        .collect();
    assert_eq!(users, vec![first.id, second.id]);

    Ok(())
}
