//! Lifecycle of a single budget period: start, record spending, annotate days.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    core::time::Clock,
    domain::{
        category::BudgetCategory,
        common::{checked_total, is_present},
        expense::{Expense, ExpenseItem},
        period::{BudgetPeriod, DaySummary},
    },
    errors::ValidationError,
};

use super::ServiceResult;

/// Snapshot-in/snapshot-out operations over a [`BudgetPeriod`].
///
/// Every mutating call validates first and then returns a fresh period; the
/// input is never modified, so a rejected call leaves the caller's snapshot as it was.
pub struct BudgetLedger;

impl BudgetLedger {
    /// Opens a new 30-day period starting at the clock's current instant.
    ///
    /// Fails when the name is blank, the budget is not positive, an
    /// allocation is negative or repeated, or allocations sum past the budget.
    pub fn start_period(
        name: &str,
        initial_budget: Decimal,
        allocations: Option<Vec<BudgetCategory>>,
        clock: &dyn Clock,
    ) -> ServiceResult<BudgetPeriod> {
        let name = name.trim();
        if !is_present(name) {
            return Err(ValidationError::EmptyField("period name"));
        }
        if initial_budget <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "initial budget",
                value: initial_budget,
            });
        }
        if let Some(categories) = allocations.as_deref() {
            Self::validate_allocations(categories, initial_budget)?;
        }

        let period = BudgetPeriod::open(name.to_string(), initial_budget, allocations, clock.now());
        info!(
            period_id = %period.id,
            name = %period.name,
            budget = %period.initial_budget,
            ends = %period.end,
            "budget period started"
        );
        Ok(period)
    }

    /// Adds `item` to the daily bucket for `target_date`, opening the bucket if needed.
    ///
    /// Overspending is allowed and shows up as a negative remaining budget.
    /// Items whose category matches no declared category still count towards
    /// the period totals.
    pub fn record_expense_item(
        period: &BudgetPeriod,
        item: ExpenseItem,
        target_date: NaiveDate,
    ) -> ServiceResult<BudgetPeriod> {
        item.validate()?;
        if period.categories.is_some() && !period.has_category(&item.category) {
            warn!(
                period_id = %period.id,
                category = %item.category,
                "item category matches no declared category; counted in totals only"
            );
        }

        let cost = item.cost();
        Self::ensure_total_fits(period, cost)?;

        let mut updated = period.clone();
        match updated.daily_bucket_mut(target_date) {
            Some(bucket) => bucket.push_item(item),
            None => updated.expenses.push(Expense::daily_bucket(target_date, item)),
        }
        updated.refresh_totals();
        debug!(
            period_id = %updated.id,
            date = %target_date,
            cost = %cost,
            remaining = %updated.remaining_budget,
            "expense item recorded"
        );
        Ok(updated)
    }

    /// Records a stand-alone expense with its own items and note.
    pub fn record_expense(
        period: &BudgetPeriod,
        items: Vec<ExpenseItem>,
        timestamp: DateTime<Utc>,
        note: Option<String>,
    ) -> ServiceResult<BudgetPeriod> {
        let expense = Expense::standalone(timestamp, items, note)?;
        Self::ensure_total_fits(period, expense.total_amount)?;
        let mut updated = period.clone();
        debug!(
            period_id = %updated.id,
            expense_id = %expense.id,
            total = %expense.total_amount,
            "expense recorded"
        );
        updated.expenses.push(expense);
        updated.refresh_totals();
        Ok(updated)
    }

    /// Sets or replaces the special-event label for `date`.
    pub fn set_special_event(
        period: &BudgetPeriod,
        date: NaiveDate,
        label: &str,
    ) -> ServiceResult<BudgetPeriod> {
        if !is_present(label) {
            return Err(ValidationError::EmptyField("special event label"));
        }
        let mut updated = period.clone();
        updated.special_events.insert(date, label.to_string());
        Ok(updated)
    }

    /// Expenses recorded on `date`. Pure filter over the period.
    pub fn aggregate_by_date(
        period: &BudgetPeriod,
        date: NaiveDate,
    ) -> impl Iterator<Item = &Expense> + Clone + '_ {
        period.expenses_on(date)
    }

    pub fn day_summary(period: &BudgetPeriod, date: NaiveDate) -> DaySummary {
        DaySummary::for_date(period, date)
    }

    /// Percent of the initial budget spent so far; may exceed 100.
    pub fn percent_used(period: &BudgetPeriod) -> Decimal {
        period.percent_used()
    }

    /// Rejects spending that would push `total_spent` past the `Decimal` range.
    fn ensure_total_fits(period: &BudgetPeriod, cost: Decimal) -> ServiceResult<()> {
        period
            .total_spent
            .checked_add(cost)
            .map(|_| ())
            .ok_or(ValidationError::AmountOverflow {
                field: "total spent",
            })
    }

    fn validate_allocations(
        categories: &[BudgetCategory],
        initial_budget: Decimal,
    ) -> ServiceResult<()> {
        let mut seen = HashSet::new();
        for category in categories {
            if !is_present(&category.name) {
                return Err(ValidationError::EmptyField("category name"));
            }
            if category.limit < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount {
                    field: "category limit",
                    value: category.limit,
                });
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ValidationError::DuplicateCategory(category.name.clone()));
            }
        }
        let allocated = checked_total(categories.iter().map(|category| category.limit)).ok_or(
            ValidationError::AmountOverflow {
                field: "category allocations",
            },
        )?;
        if allocated > initial_budget {
            return Err(ValidationError::CategoryOverAllocation {
                allocated,
                budget: initial_budget,
            });
        }
        Ok(())
    }
}
