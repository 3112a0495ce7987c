//! The 30-day budget period ("month") and its derived aggregates.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{category::BudgetCategory, common::*, expense::Expense};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetPeriod {
    pub id: Uuid,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub initial_budget: Decimal,
    pub remaining_budget: Decimal,
    pub total_spent: Decimal,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<BudgetCategory>>,
    #[serde(default)]
    pub special_events: BTreeMap<NaiveDate, String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl BudgetPeriod {
    /// Opens a period at `start` lasting [`PERIOD_LENGTH_DAYS`]. Inputs are not validated here.
    pub(crate) fn open(
        name: String,
        initial_budget: Decimal,
        categories: Option<Vec<BudgetCategory>>,
        start: DateTime<Utc>,
    ) -> Self {
        let mut period = Self {
            id: Uuid::new_v4(),
            name,
            start,
            end: start + Duration::days(PERIOD_LENGTH_DAYS),
            initial_budget,
            remaining_budget: initial_budget,
            total_spent: Decimal::ZERO,
            expenses: Vec::new(),
            categories,
            special_events: BTreeMap::new(),
            is_completed: false,
        };
        period.refresh_totals();
        period
    }

    /// Recomputes every derived amount from the recorded items.
    ///
    /// Expense totals, `total_spent`, `remaining_budget` and per-category
    /// `spent` are rebuilt from scratch so they never drift from the items.
    pub fn refresh_totals(&mut self) {
        for expense in &mut self.expenses {
            expense.refresh_total();
        }
        self.total_spent = sum_amounts(&self.expenses);
        self.remaining_budget = self.initial_budget - self.total_spent;

        if let Some(categories) = self.categories.as_mut() {
            for category in categories.iter_mut() {
                category.spent = self
                    .expenses
                    .iter()
                    .flat_map(|expense| expense.items.iter())
                    .filter(|item| category.matches(&item.category))
                    .map(|item| item.cost())
                    .sum();
            }
        }
    }

    /// `total_spent / initial_budget × 100`, unclamped.
    pub fn percent_used(&self) -> Decimal {
        if self.initial_budget.is_zero() {
            return Decimal::ZERO;
        }
        saturating_percent(self.total_spent, self.initial_budget)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end < now
    }

    /// Days until the period ends, rounded up; zero or negative once it has ended.
    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        ceil_days(self.end - now)
    }

    pub fn category(&self, name: &str) -> Option<&BudgetCategory> {
        self.categories
            .as_ref()
            .and_then(|categories| find_by_name(categories, name))
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Expenses whose UTC day equals `date`, in recording order.
    ///
    /// The iterator borrows the period and can be cloned to walk it again.
    pub fn expenses_on(&self, date: NaiveDate) -> impl Iterator<Item = &Expense> + Clone + '_ {
        self.expenses
            .iter()
            .filter(move |expense| expense.date() == date)
    }

    pub fn special_event(&self, date: NaiveDate) -> Option<&str> {
        self.special_events.get(&date).map(String::as_str)
    }

    pub(crate) fn daily_bucket_mut(&mut self, date: NaiveDate) -> Option<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|expense| expense.is_daily_bucket_for(date))
    }
}

impl Identifiable for BudgetPeriod {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for BudgetPeriod {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Spend recorded on a single calendar day of a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total: Decimal,
    pub expense_count: usize,
    pub item_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_event: Option<String>,
}

impl DaySummary {
    pub fn for_date(period: &BudgetPeriod, date: NaiveDate) -> Self {
        let expenses = period.expenses_on(date);
        Self {
            date,
            total: expenses.clone().map(|expense| expense.total_amount).sum(),
            expense_count: expenses.clone().count(),
            item_count: expenses.map(Expense::item_count).sum(),
            special_event: period.special_event(date).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::expense::ExpenseItem;

    fn period() -> BudgetPeriod {
        let start = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();
        BudgetPeriod::open("ফেব্রুয়ারি".into(), Decimal::from(30000), None, start)
    }

    #[test]
    fn open_spans_thirty_days() {
        let period = period();
        assert_eq!(period.end - period.start, Duration::days(30));
        assert_eq!(period.remaining_budget, Decimal::from(30000));
        assert!(period.expenses.is_empty());
        assert!(!period.is_completed);
    }

    #[test]
    fn days_left_rounds_up_and_goes_negative() {
        let period = period();
        assert_eq!(period.days_left(period.start), 30);
        assert_eq!(period.days_left(period.end - Duration::hours(2)), 1);
        assert_eq!(period.days_left(period.end + Duration::days(3)), -3);
        assert!(period.is_expired(period.end + Duration::seconds(1)));
        assert!(!period.is_expired(period.end));
    }

    #[test]
    fn expenses_on_can_be_walked_twice() {
        let mut period = period();
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        let item = ExpenseItem::new("ডিম", Decimal::from(12), "pcs", Decimal::from(15), "খাবার")
            .unwrap();
        period.expenses.push(Expense::daily_bucket(date, item));
        period.refresh_totals();

        let day = period.expenses_on(date);
        assert_eq!(day.clone().count(), 1);
        assert_eq!(day.count(), 1);
        assert_eq!(period.expenses_on(date.succ_opt().unwrap()).count(), 0);
    }
}
