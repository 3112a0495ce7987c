//! Category allocations attached to a budget period.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Spending allocation for a named category within one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub name: String,
    pub limit: Decimal,
    /// Derived from the period's items on every mutation.
    #[serde(default)]
    pub spent: Decimal,
    pub color: String,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, limit: Decimal, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit,
            spent: Decimal::ZERO,
            color: color.into(),
        }
    }

    /// Limit left after spending; negative once the category is overspent.
    pub fn remaining(&self) -> Decimal {
        self.limit - self.spent
    }

    /// Share of the limit already spent, in percent. `None` for a zero limit.
    pub fn utilization_percent(&self) -> Option<Decimal> {
        if self.limit.is_zero() {
            return None;
        }
        Some(saturating_percent(self.spent, self.limit))
    }

    pub fn matches(&self, label: &str) -> bool {
        self.name() == label
    }
}

impl NamedEntity for BudgetCategory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for BudgetCategory {
    fn amount(&self) -> Decimal {
        self.limit
    }
}

/// Name and colour of a category offered when a period is started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub name: String,
    pub color: String,
}

impl CategoryTemplate {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Turns the template into an allocation with the given limit.
    pub fn allocate(&self, limit: Decimal) -> BudgetCategory {
        BudgetCategory::new(self.name.clone(), limit, self.color.clone())
    }
}

static DEFAULT_TEMPLATES: Lazy<Vec<CategoryTemplate>> = Lazy::new(|| {
    vec![
        CategoryTemplate::new("খাবার", "#3B82F6"),
        CategoryTemplate::new("পরিবহন", "#10B981"),
        CategoryTemplate::new("বাসা ভাড়া", "#F59E0B"),
        CategoryTemplate::new("শপিং", "#8B5CF6"),
        CategoryTemplate::new("বিনোদন", "#EC4899"),
        CategoryTemplate::new("অন্যান্য", "#6B7280"),
    ]
});

/// Built-in categories: food, transport, rent, shopping, entertainment, other.
pub fn default_category_templates() -> &'static [CategoryTemplate] {
    &DEFAULT_TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_handles_zero_limit() {
        let mut category = BudgetCategory::new("শপিং", Decimal::ZERO, "#8B5CF6");
        assert_eq!(category.utilization_percent(), None);

        category.limit = Decimal::from(2000);
        category.spent = Decimal::from(500);
        assert_eq!(category.utilization_percent(), Some(Decimal::from(25)));
        assert_eq!(category.remaining(), Decimal::from(1500));
    }

    #[test]
    fn default_templates_cover_six_categories() {
        let templates = default_category_templates();
        assert_eq!(templates.len(), 6);
        assert_eq!(templates[0].name, "খাবার");
        let food = templates[0].allocate(Decimal::from(8000));
        assert_eq!(food.limit, Decimal::from(8000));
        assert!(food.spent.is_zero());
    }
}
