//! SQLite storage implementation for daily picks.

mod model;
mod repository;

pub use model::DailyPickDB;
pub use repository::DailyPickRepository;
