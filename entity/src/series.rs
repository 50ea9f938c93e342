use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_series::Entity")]
    PostSeries,
}

impl Related<super::post_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostSeries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
