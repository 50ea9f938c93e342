//! User factory.

use crate::factory::helpers::{next_id, next_timestamp};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for test users.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db).discord_id("123456789").name("Racer").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    avatar: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a factory with defaults: Discord id `"{n}"`, name `"Driver {n}"`, no avatar.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Driver {}", id),
            avatar: None,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Inserts the user.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            avatar: ActiveValue::Set(self.avatar),
            created_at: ActiveValue::Set(next_timestamp()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
