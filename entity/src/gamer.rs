use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gamer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Caller identity, matched against the `Authorization` header.
    #[sea_orm(unique)]
    pub uid: String,
    pub bio: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game::Entity")]
    Game,
    #[sea_orm(has_many = "super::event_gamer::Entity")]
    EventGamer,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::event_gamer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventGamer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
