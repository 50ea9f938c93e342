use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_car::Entity")]
    PostCar,
}

impl Related<super::post_car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostCar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
