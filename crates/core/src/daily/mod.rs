//! Daily quote module - the per-day rotation and its persistence contract.

mod calendar;
mod daily_model;
mod daily_service;
mod daily_traits;


pub use calendar::{Clock, FixedClock, SystemClock};
pub use daily_model::{DailyPick, DailyQuote};
pub use daily_service::DailyQuoteService;
pub use daily_traits::{DailyPickRepositoryTrait, DailyQuoteServiceTrait};
