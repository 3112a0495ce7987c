#![doc(test(attr(deny(warnings))))]

//! Pocket Core holds the bookkeeping rules behind a personal budget, a shared
//! mess (meal-split) pool and a family bill/grocery board.
//!
//! Every operation takes a snapshot by reference and hands back a new one;
//! persistence, scheduling and presentation stay with the caller.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::config::{Config, ConfigManager};
pub use crate::core::services::{
    BudgetLedger, HouseholdService, Notifier, PersonalService, ReminderEvaluator,
    ServiceResult, SettlementCalculator,
};
pub use crate::core::{Clock, FixedClock, SystemClock};
pub use crate::errors::{PocketError, Result, ValidationError};
pub use crate::storage::{JsonSnapshotStore, SnapshotStore};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Core tracing initialized.");
    });
}
