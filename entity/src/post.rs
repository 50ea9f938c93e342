use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub event_id: Option<i32>,
    pub series_id: Option<i32>,
    pub car_class_id: Option<i32>,
    pub track_id: Option<i32>,
    /// Legacy single category, always the first entry of the `post_category` set.
    pub category: String,
    pub min_license_level: String,
    pub min_irating: i32,
    pub timezone: String,
    pub event_start_at: Option<DateTimeUtc>,
    pub slots_total: i32,
    pub status: String,
    pub is_public: bool,
    pub contact_hint: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::series::Entity",
        from = "Column::SeriesId",
        to = "super::series::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Series,
    #[sea_orm(
        belongs_to = "super::car_class::Entity",
        from = "Column::CarClassId",
        to = "super::car_class::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CarClass,
    #[sea_orm(
        belongs_to = "super::track::Entity",
        from = "Column::TrackId",
        to = "super::track::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Track,
    #[sea_orm(has_many = "super::post_category::Entity")]
    PostCategory,
    #[sea_orm(has_many = "super::post_series::Entity")]
    PostSeries,
    #[sea_orm(has_many = "super::post_car_class::Entity")]
    PostCarClass,
    #[sea_orm(has_many = "super::post_car::Entity")]
    PostCar,
    #[sea_orm(has_many = "super::post_track::Entity")]
    PostTrack,
    #[sea_orm(has_many = "super::post_language::Entity")]
    PostLanguage,
    #[sea_orm(has_many = "super::post_application::Entity")]
    PostApplication,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::team_message::Entity")]
    TeamMessage,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::post_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostCategory.def()
    }
}

impl Related<super::post_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostSeries.def()
    }
}

impl Related<super::post_car_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostCarClass.def()
    }
}

impl Related<super::post_car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostCar.def()
    }
}

impl Related<super::post_track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostTrack.def()
    }
}

impl Related<super::post_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostLanguage.def()
    }
}

impl Related<super::post_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostApplication.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::team_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
