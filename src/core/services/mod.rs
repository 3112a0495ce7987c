pub mod household_service;
pub mod ledger_service;
pub mod personal_service;
pub mod reminder_service;
pub mod settlement_service;

pub use household_service::HouseholdService;
pub use ledger_service::BudgetLedger;
pub use personal_service::PersonalService;
pub use reminder_service::{Notifier, ReminderEvaluator, DEFAULT_THRESHOLD_DAYS};
pub use settlement_service::SettlementCalculator;

use crate::errors::ValidationError;

pub type ServiceResult<T> = Result<T, ValidationError>;
