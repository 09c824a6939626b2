//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let gamer = factory::create_gamer(&db).await?;
//!     let game_type = factory::create_game_type(&db).await?;
//!
//!     // Create with all dependencies
//!     let (gamer, game_type, game, event) =
//!         factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let gamer = factory::gamer::GamerFactory::new(&db)
//!     .uid("firebase-uid")
//!     .bio("Plays tabletop on weekends")
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod event_gamer;
pub mod game;
pub mod game_type;
pub mod gamer;
pub mod helpers;

pub use event::{create_event, create_events_bulk};
pub use event_gamer::create_event_gamer;
pub use game::create_game;
pub use game_type::create_game_type;
pub use gamer::{create_gamer, create_gamer_with_uid};
