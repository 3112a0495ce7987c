#![allow(dead_code)]

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pocket_core::{
    core::services::BudgetLedger,
    domain::{BudgetCategory, BudgetPeriod, ContributionPool, ExpenseItem, Member},
    FixedClock,
};
use rust_decimal::Decimal;

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("decimal literal")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid instant")
}

/// Start of every sample period: 2026-03-01 09:00 UTC.
pub fn fixed_clock() -> FixedClock {
    FixedClock(at(2026, 3, 1, 9))
}

pub fn item(name: &str, quantity: &str, price: &str, category: &str) -> ExpenseItem {
    ExpenseItem::new(name, dec(quantity), "পিস", dec(price), category).expect("valid item")
}

/// A 30000 budget with food and transport allocations.
pub fn sample_period() -> BudgetPeriod {
    let categories = vec![
        BudgetCategory::new("খাবার", dec("12000"), "#3B82F6"),
        BudgetCategory::new("পরিবহন", dec("4000"), "#10B981"),
    ];
    BudgetLedger::start_period("মার্চ", dec("30000"), Some(categories), &fixed_clock())
        .expect("sample period")
}

/// Two members with the given meal counts and fixed costs, no entries yet.
pub fn sample_pool(meals: [&str; 2], fixed: [&str; 2]) -> ContributionPool {
    let mut pool = ContributionPool::empty();
    for (name, (count, cost)) in ["A", "B"].iter().zip(meals.iter().zip(fixed.iter())) {
        let mut member = Member::new(*name, dec(cost));
        member.consumption = dec(count);
        pool.members.push(member);
    }
    pool
}
