//! Plain data models for the three tracker modes.
//!
//! No I/O and no policy: only types, derived-value helpers and the snapshot
//! that ties them together.

pub mod category;
pub mod common;
pub mod expense;
pub mod household;
pub mod period;
pub mod settlement;
pub mod snapshot;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use household::*;
pub use period::*;
pub use settlement::*;
pub use snapshot::{AppSnapshot, PersonalData};
