//! Family-mode data: utility bill reminders, the grocery list and members.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Fixed set of utility bills the reminder tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillKind {
    Electricity,
    Gas,
    Water,
    Internet,
}

impl fmt::Display for BillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillKind::Electricity => "electricity",
            BillKind::Gas => "gas",
            BillKind::Water => "water",
            BillKind::Internet => "internet",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillReminder {
    pub id: Uuid,
    pub kind: BillKind,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    #[serde(default)]
    pub paid: bool,
    /// Set once by the reminder scan; never cleared.
    #[serde(default)]
    pub notified: bool,
}

impl BillReminder {
    pub fn new(kind: BillKind, due_date: NaiveDate, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            due_date,
            amount,
            paid: false,
            notified: false,
        }
    }
}

impl Identifiable for BillReminder {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for BillReminder {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    #[serde(default)]
    pub completed: bool,
    pub added_by: String,
}

impl Identifiable for GroceryItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyMember {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyData {
    #[serde(default)]
    pub grocery_list: Vec<GroceryItem>,
    #[serde(default)]
    pub bills: Vec<BillReminder>,
    #[serde(default)]
    pub members: Vec<FamilyMember>,
}

impl FamilyData {
    pub fn bill(&self, id: Uuid) -> Option<&BillReminder> {
        find_by_id(&self.bills, id)
    }

    pub(crate) fn bill_mut(&mut self, id: Uuid) -> Option<&mut BillReminder> {
        find_by_id_mut(&mut self.bills, id)
    }

    pub(crate) fn grocery_item_mut(&mut self, id: Uuid) -> Option<&mut GroceryItem> {
        find_by_id_mut(&mut self.grocery_list, id)
    }
}

/// Empty lists and two placeholder members.
impl Default for FamilyData {
    fn default() -> Self {
        Self {
            grocery_list: Vec::new(),
            bills: Vec::new(),
            members: vec![FamilyMember::new("সদস্য ১"), FamilyMember::new("সদস্য ২")],
        }
    }
}
