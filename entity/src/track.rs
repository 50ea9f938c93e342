use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "track")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_track::Entity")]
    PostTrack,
}

impl Related<super::post_track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostTrack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
