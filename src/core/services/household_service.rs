//! Family-mode list keeping: groceries and utility bills.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    domain::{
        common::is_present,
        household::{BillKind, BillReminder, FamilyData, GroceryItem},
    },
    errors::ValidationError,
};

use super::ServiceResult;

pub struct HouseholdService;

impl HouseholdService {
    pub fn add_grocery_item(
        family: &FamilyData,
        name: &str,
        quantity: Decimal,
        unit: &str,
        added_by: &str,
    ) -> ServiceResult<(FamilyData, Uuid)> {
        if !is_present(name) {
            return Err(ValidationError::EmptyField("grocery item name"));
        }
        if quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "grocery quantity",
                value: quantity,
            });
        }
        let item = GroceryItem {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            quantity,
            unit: unit.to_string(),
            completed: false,
            added_by: added_by.to_string(),
        };
        let id = item.id;
        let mut updated = family.clone();
        updated.grocery_list.push(item);
        Ok((updated, id))
    }

    /// Flips the completed flag of a grocery item.
    pub fn toggle_grocery_item(family: &FamilyData, id: Uuid) -> ServiceResult<FamilyData> {
        let mut updated = family.clone();
        let item = updated
            .grocery_item_mut(id)
            .ok_or(ValidationError::UnknownReference {
                kind: "grocery item",
                id,
            })?;
        item.completed = !item.completed;
        Ok(updated)
    }

    pub fn pending_grocery(family: &FamilyData) -> Vec<&GroceryItem> {
        family
            .grocery_list
            .iter()
            .filter(|item| !item.completed)
            .collect()
    }

    pub fn add_bill(
        family: &FamilyData,
        kind: BillKind,
        due_date: NaiveDate,
        amount: Decimal,
    ) -> ServiceResult<(FamilyData, Uuid)> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "bill amount",
                value: amount,
            });
        }
        let bill = BillReminder::new(kind, due_date, amount);
        let id = bill.id;
        let mut updated = family.clone();
        updated.bills.push(bill);
        Ok((updated, id))
    }

    /// Flips the paid flag. The notified flag is left alone.
    pub fn toggle_bill_paid(family: &FamilyData, id: Uuid) -> ServiceResult<FamilyData> {
        let mut updated = family.clone();
        let bill = Self::bill_mut(&mut updated, id)?;
        bill.paid = !bill.paid;
        Ok(updated)
    }

    /// Sets `notified`; calling it again on a notified bill changes nothing.
    pub fn mark_bill_notified(family: &FamilyData, id: Uuid) -> ServiceResult<FamilyData> {
        let mut updated = family.clone();
        Self::bill_mut(&mut updated, id)?.notified = true;
        Ok(updated)
    }

    /// Unpaid bills, earliest due first.
    pub fn upcoming_bills(family: &FamilyData) -> Vec<&BillReminder> {
        let mut bills: Vec<_> = family.bills.iter().filter(|bill| !bill.paid).collect();
        bills.sort_by_key(|bill| bill.due_date);
        bills
    }

    pub fn paid_bills(family: &FamilyData) -> Vec<&BillReminder> {
        let mut bills: Vec<_> = family.bills.iter().filter(|bill| bill.paid).collect();
        bills.sort_by_key(|bill| bill.due_date);
        bills
    }

    fn bill_mut(family: &mut FamilyData, id: Uuid) -> ServiceResult<&mut BillReminder> {
        family
            .bill_mut(id)
            .ok_or(ValidationError::UnknownReference { kind: "bill", id })
    }
}
