//! Due-date gating for bill reminders.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    common::{ceil_days, start_of_day},
    household::{BillReminder, FamilyData},
};

/// Threshold used by the reference scan: due tomorrow or earlier.
pub const DEFAULT_THRESHOLD_DAYS: i64 = 1;

/// Alert dispatch capability owned by the caller (desktop toast, push, log line...).
pub trait Notifier {
    fn notify(&mut self, bill: &BillReminder);
}

impl<F> Notifier for F
where
    F: FnMut(&BillReminder),
{
    fn notify(&mut self, bill: &BillReminder) {
        self(bill)
    }
}

pub struct ReminderEvaluator;

impl ReminderEvaluator {
    /// Whole days from `now` until the bill's due date (UTC midnight), rounded up.
    pub fn days_until(bill: &BillReminder, now: DateTime<Utc>) -> i64 {
        ceil_days(start_of_day(bill.due_date) - now)
    }

    /// `true` for an unpaid, not-yet-notified bill due within `threshold_days`.
    pub fn due_within_threshold(
        bill: &BillReminder,
        as_of: DateTime<Utc>,
        threshold_days: i64,
    ) -> bool {
        !bill.paid && !bill.notified && Self::days_until(bill, as_of) <= threshold_days
    }

    /// One scan pass: alerts every bill that is due and returns the family
    /// data with those bills flagged as notified.
    ///
    /// Scanning the returned snapshot again fires nothing.
    pub fn scan(
        family: &FamilyData,
        as_of: DateTime<Utc>,
        threshold_days: i64,
        notifier: &mut dyn Notifier,
    ) -> FamilyData {
        let mut updated = family.clone();
        for bill in updated.bills.iter_mut() {
            if Self::due_within_threshold(bill, as_of, threshold_days) {
                info!(
                    bill_id = %bill.id,
                    kind = %bill.kind,
                    due = %bill.due_date,
                    amount = %bill.amount,
                    "bill reminder fired"
                );
                notifier.notify(bill);
                bill.notified = true;
            }
        }
        updated
    }
}
