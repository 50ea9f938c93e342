use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "language")]
pub struct Model {
    /// Short language code such as `en` or `de`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_language::Entity")]
    PostLanguage,
}

impl Related<super::post_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostLanguage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
