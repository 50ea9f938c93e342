use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car_class")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_car_class::Entity")]
    PostCarClass,
}

impl Related<super::post_car_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostCarClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
