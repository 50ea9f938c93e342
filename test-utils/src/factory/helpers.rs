//! Shared helpers for the factories.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next value of a process-wide counter.
///
/// Used to derive unique Discord ids, names and timestamps for factory rows.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a whole-second timestamp that is strictly later than every earlier call.
///
/// Posts created in sequence therefore sort by creation time in creation order, which keeps
/// `created_at` ordering in tests deterministic without sleeping.
pub fn next_timestamp() -> DateTime<Utc> {
    let seconds = 1_767_225_600 + next_id() as i64;
    Utc.timestamp_opt(seconds, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates a user and a default open public post owned by that user.
///
/// # Returns
/// - `Ok((user, post))` - The created owner and post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, user.id).await?;

    Ok((user, post))
}

/// Creates a post with its owner and one accepted member.
///
/// # Returns
/// - `Ok((owner, member, post))` - The created users and post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user::Model, entity::post::Model), DbErr> {
    let (owner, post) = create_post_with_owner(db).await?;
    let member = crate::factory::user::create_user(db).await?;
    crate::factory::post_application::PostApplicationFactory::new(db, post.id, member.id)
        .status("accepted")
        .build()
        .await?;

    Ok((owner, member, post))
}
