//! User data repository.

use crate::server::model::user::{UpsertUserParam, User};
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes the name and avatar of an existing one.
    ///
    /// Users are matched by Discord id; the local id and `created_at` of an existing user
    /// are kept.
    ///
    /// # Arguments
    /// - `param` - Discord id, display name and avatar hash from the Discord API
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            name: ActiveValue::Set(param.name),
            avatar: ActiveValue::Set(param.avatar),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([entity::user::Column::Name, entity::user::Column::Avatar])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by local id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the users with the given local ids. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by Discord id.
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
