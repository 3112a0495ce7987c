//! Expense records and the purchased items they carry.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::common::*, errors::ValidationError};

/// Display note attached to the implicit per-day expense bucket.
pub const DAILY_BUCKET_NOTE: &str = "দৈনিক খরচ";

/// A single purchased line: name, quantity, unit, unit price and category label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub price: Decimal,
    pub category: String,
}

impl ExpenseItem {
    /// Builds a validated item. Quantity must be positive and price non-negative.
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            price,
            category: category.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks the item invariants; fields are public so callers may have built it by hand.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_present(&self.name) {
            return Err(ValidationError::EmptyField("item name"));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "quantity",
                value: self.quantity,
            });
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "price",
                value: self.price,
            });
        }
        if self.price.checked_mul(self.quantity).is_none() {
            return Err(ValidationError::AmountOverflow { field: "item cost" });
        }
        Ok(())
    }

    /// Price multiplied by quantity.
    pub fn cost(&self) -> Decimal {
        self.price * self.quantity
    }
}

impl Identifiable for ExpenseItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ExpenseItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for ExpenseItem {
    fn amount(&self) -> Decimal {
        self.cost()
    }
}

/// Distinguishes the implicit same-day bucket from stand-alone expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExpenseKind {
    /// Collects every item logged for one calendar day.
    DailyBucket,
    #[default]
    Standalone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<ExpenseItem>,
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub kind: ExpenseKind,
}

impl Expense {
    /// Opens the daily bucket for `date`, seeded with its first item.
    pub fn daily_bucket(date: NaiveDate, first: ExpenseItem) -> Self {
        let mut expense = Self {
            id: Uuid::new_v4(),
            timestamp: start_of_day(date),
            items: vec![first],
            total_amount: Decimal::ZERO,
            note: Some(DAILY_BUCKET_NOTE.to_string()),
            kind: ExpenseKind::DailyBucket,
        };
        expense.refresh_total();
        expense
    }

    /// Builds a stand-alone expense. At least one item is required.
    pub fn standalone(
        timestamp: DateTime<Utc>,
        items: Vec<ExpenseItem>,
        note: Option<String>,
    ) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::EmptyField("expense items"));
        }
        for item in &items {
            item.validate()?;
        }
        if checked_total(items.iter().map(ExpenseItem::cost)).is_none() {
            return Err(ValidationError::AmountOverflow {
                field: "expense total",
            });
        }
        let mut expense = Self {
            id: Uuid::new_v4(),
            timestamp,
            items,
            total_amount: Decimal::ZERO,
            note: note.filter(|value| is_present(value)),
            kind: ExpenseKind::Standalone,
        };
        expense.refresh_total();
        Ok(expense)
    }

    /// Calendar day (UTC) the expense belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn is_daily_bucket_for(&self, date: NaiveDate) -> bool {
        self.kind == ExpenseKind::DailyBucket && self.date() == date
    }

    pub fn push_item(&mut self, item: ExpenseItem) {
        self.items.push(item);
        self.refresh_total();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Recomputes `total_amount` from the items.
    pub fn refresh_total(&mut self) {
        self.total_amount = sum_amounts(&self.items);
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> Decimal {
        self.total_amount
    }
}
