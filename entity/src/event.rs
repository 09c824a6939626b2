use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_id: i32,
    pub description: String,
    pub date: Date,
    pub time: Time,
    pub organizer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game::Entity",
        from = "Column::GameId",
        to = "super::game::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::gamer::Entity",
        from = "Column::OrganizerId",
        to = "super::gamer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Organizer,
    #[sea_orm(has_many = "super::event_gamer::Entity")]
    EventGamer,
}

impl Related<super::game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::gamer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::event_gamer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventGamer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
