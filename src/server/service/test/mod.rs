use crate::server::{error::AppError, model::gamer::Gamer};
use test_utils::{builder::TestBuilder, factory};


fn as_gamer(model: &entity::gamer::Model) -> Gamer {
    Gamer::from_entity(model.clone())
}
