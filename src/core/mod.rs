//! Stateless services over the domain snapshot, plus the clock and path helpers they share.

pub mod services;
pub mod time;
pub mod utils;

pub use time::{Clock, FixedClock, SystemClock};
