pub mod adjust;
pub mod card;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod run;
pub mod schedule;
pub mod store;
pub mod weather;

pub use adjust::{
    Adjustment, Effect, RangeSummary, adjust_club, adjusted_distance, raw_adjusted_distance,
    resolve_day_conditions, summarize_range,
};
pub use error::CoreError;
