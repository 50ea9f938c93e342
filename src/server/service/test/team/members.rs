use super::*;

/// Tests reading the team of a post as a member.
///
/// Expected: owner first, then accepted applicants; pending applicants left out
#[tokio::test]
async fn member_sees_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, member, post) = factory::helpers::create_team(db).await?;
    let pending = factory::create_user(db).await?;
    factory::create_application(db, post.id, pending.id).await?;

    let team = TeamService::new(db).get_team(post.id, member.id).await?;

    assert_eq!(team.post_id, post.id);
    assert_eq!(team.title, post.title);

    let roles: Vec<(i32, TeamRole)> = team.members.iter().map(|m| (m.user.id, m.role)).collect();
    assert_eq!(
        roles,
        vec![(owner.id, TeamRole::Owner), (member.id, TeamRole::Member)]
    );
    assert_eq!(team.members[0].joined_at, post.created_at);

    Ok(())
}

/// Tests reading a team without being on it.
///
/// Expected: Forbidden for a pending applicant, NotFound for an unknown post
#[tokio::test]
async fn rejects_team_access_by_outsiders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, post) = factory::helpers::create_team(db).await?;
    let pending = factory::create_user(db).await?;
    factory::create_application(db, post.id, pending.id).await?;

    let service = TeamService::new(db);

    let outsider = service.get_team(post.id, pending.id).await;
    assert!(matches!(outsider, Err(AppError::Forbidden(_))));

    let missing = service.get_team(404, pending.id).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing the caller's teams.
///
/// Expected: owned teams with the owner role first, then accepted ones with the member role
#[tokio::test]
async fn lists_my_teams_with_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, joined) = factory::helpers::create_team(db).await?;
    let own = factory::create_post(db, owner.id).await?;
    let (_, rejected) = factory::helpers::create_post_with_owner(db).await?;
    let user = factory::create_user(db).await?;
    PostApplicationFactory::new(db, joined.id, user.id)
        .status("accepted")
        .build()
        .await?;
    PostApplicationFactory::new(db, rejected.id, user.id)
        .status("rejected")
        .build()
        .await?;
    let users_post = factory::create_post(db, user.id).await?;

    let teams = TeamService::new(db).get_my_teams(user.id).await?;

    let listed: Vec<(i32, TeamRole)> = teams.iter().map(|t| (t.post_id, t.role)).collect();
    assert_eq!(
        listed,
        vec![(users_post.id, TeamRole::Owner), (joined.id, TeamRole::Member)]
    );

    let owner_teams = TeamService::new(db).get_my_teams(owner.id).await?;
    assert_eq!(owner_teams.len(), 2);
    assert!(owner_teams.iter().all(|t| t.role == TeamRole::Owner));
    assert_eq!(owner_teams[0].post_id, own.id);

    Ok(())
}

/// Tests the owner removing a member.
///
/// Expected: Ok and the member loses access to the team
#[tokio::test]
async fn owner_removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, member, post) = factory::helpers::create_team(db).await?;
    let service = TeamService::new(db);

    service.remove_member(post.id, member.id, owner.id).await?;

    let team = service.get_team(post.id, owner.id).await?;
    assert_eq!(team.members.len(), 1);

    let removed = service.get_team(post.id, member.id).await;
    assert!(matches!(removed, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a member leaving a team.
///
/// Expected: Ok and the team no longer listed for them
#[tokio::test]
async fn member_leaves_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, member, post) = factory::helpers::create_team(db).await?;
    let service = TeamService::new(db);

    service.remove_member(post.id, member.id, member.id).await?;

    assert!(service.get_my_teams(member.id).await?.is_empty());

    Ok(())
}

/// Tests rejected member removals.
///
/// Verifies a member removing someone else, the owner leaving, a pending applicant and
/// an unknown post.
///
/// Expected: Forbidden, BadRequest, NotFound and NotFound respectively
#[tokio::test]
async fn rejects_invalid_removals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_team_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, member, post) = factory::helpers::create_team(db).await?;
    let second = factory::create_user(db).await?;
    PostApplicationFactory::new(db, post.id, second.id)
        .status("accepted")
        .build()
        .await?;
    let pending = factory::create_user(db).await?;
    factory::create_application(db, post.id, pending.id).await?;

    let service = TeamService::new(db);

    let other = service.remove_member(post.id, second.id, member.id).await;
    assert!(matches!(other, Err(AppError::Forbidden(_))));

    let owner_leaves = service.remove_member(post.id, owner.id, owner.id).await;
    assert!(matches!(owner_leaves, Err(AppError::BadRequest(_))));

    let not_member = service.remove_member(post.id, pending.id, owner.id).await;
    assert!(matches!(not_member, Err(AppError::NotFound(_))));

    let missing = service.remove_member(404, member.id, owner.id).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    assert_eq!(service.get_team(post.id, owner.id).await?.members.len(), 3);

    Ok(())
}
