//! Shared traits and time utilities for the pocket tracker models.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Length of a budget period; fixed once the period exists.
pub const PERIOD_LENGTH_DAYS: i64 = 30;

/// Exposes a stable identifier for entities held in the snapshot.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Returns the UTC midnight instant that opens `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days covered by `delta`, rounded towards positive infinity.
///
/// `ceil_days(Duration::hours(1)) == 1`, `ceil_days(Duration::hours(-1)) == 0`.
pub fn ceil_days(delta: Duration) -> i64 {
    let days = delta.num_days();
    if delta - Duration::days(days) > Duration::zero() {
        days + 1
    } else {
        days
    }
}

/// Sums any iterator of amounts. Callers guarantee the total fits; see [`checked_total`].
pub fn sum_amounts<'a, T: Amounted + 'a>(items: impl IntoIterator<Item = &'a T>) -> Decimal {
    items.into_iter().map(Amounted::amount).sum()
}

/// Sum of `values`, or `None` once it no longer fits in a `Decimal`.
pub fn checked_total(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

/// `part / whole × 100`, saturating at `Decimal::MAX` instead of overflowing.
/// `whole` must be non-zero.
pub fn saturating_percent(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() != whole.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

pub fn find_by_id_mut<T: Identifiable>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

/// Exact, case-sensitive name lookup.
pub fn find_by_name<'a, T: NamedEntity>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

/// Returns `true` when the trimmed value holds at least one character.
pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
