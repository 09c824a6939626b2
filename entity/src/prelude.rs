pub use super::event::Entity as Event;
pub use super::event_gamer::Entity as EventGamer;
pub use super::game::Entity as Game;
pub use super::game_type::Entity as GameType;
pub use super::gamer::Entity as Gamer;
