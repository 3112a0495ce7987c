mod common;

use common::{at, dec, sample_pool};
use pocket_core::{core::services::SettlementCalculator, domain::ContributionPool, ValidationError};
use rust_decimal::Decimal;
use uuid::Uuid;

fn funded_pool(meals: [&str; 2], fixed: [&str; 2], amounts: &[&str]) -> ContributionPool {
    let mut pool = sample_pool(meals, fixed);
    let payer = pool.members[0].id;
    for (idx, amount) in amounts.iter().enumerate() {
        pool = SettlementCalculator::add_contribution(
            &pool,
            dec(amount),
            "বাজার",
            payer,
            at(2026, 3, 1 + idx as u32, 8),
        )
        .expect("contribution");
    }
    pool
}

#[test]
fn meals_split_the_pool_proportionally() {
    let pool = funded_pool(["10", "5"], ["0", "0"], &["800", "700"]);
    assert_eq!(SettlementCalculator::unit_rate(&pool), dec("100"));

    let balances = SettlementCalculator::balances(&pool);
    assert_eq!(balances[0].total, dec("1000"));
    assert_eq!(balances[1].total, dec("500"));
    assert_eq!(balances[0].consumption_cost, dec("1000"));
}

#[test]
fn fixed_costs_are_added_on_top() {
    let pool = funded_pool(["10", "5"], ["1500", "1200"], &["800", "700"]);
    let a = &pool.members[0];
    let b = &pool.members[1];
    assert_eq!(SettlementCalculator::member_balance(&pool, a), dec("2500"));
    assert_eq!(SettlementCalculator::member_balance(&pool, b), dec("1700"));
}

#[test]
fn balances_account_for_the_whole_pool() {
    let pool = funded_pool(["7", "11"], ["250.50", "300"], &["333.33", "911.07", "45"]);
    let balances = SettlementCalculator::balances(&pool);
    let total: Decimal = balances.iter().map(|balance| balance.total).sum();
    let expected = pool.total_contributions() + pool.total_fixed_costs();
    let tolerance = dec("0.000001");
    assert!((total - expected).abs() <= tolerance, "{total} vs {expected}");
}

#[test]
fn no_consumption_means_zero_rate() {
    let pool = funded_pool(["0", "0"], ["100", "0"], &["500"]);
    assert_eq!(SettlementCalculator::unit_rate(&pool), Decimal::ZERO);
    let balances = SettlementCalculator::balances(&pool);
    assert_eq!(balances[0].total, dec("100"));
    assert_eq!(balances[1].total, Decimal::ZERO);
}

#[test]
fn negative_counts_are_clamped_to_zero() {
    let pool = sample_pool(["4", "4"], ["0", "0"]);
    let id = pool.members[0].id;
    let updated = SettlementCalculator::set_consumption_count(&pool, id, dec("-3")).unwrap();
    assert_eq!(updated.member(id).map(|m| m.consumption), Some(Decimal::ZERO));

    let updated = SettlementCalculator::set_consumption_count(&updated, id, dec("12.5")).unwrap();
    assert_eq!(updated.member(id).map(|m| m.consumption), Some(dec("12.5")));

    let stranger = Uuid::new_v4();
    assert_eq!(
        SettlementCalculator::set_consumption_count(&pool, stranger, dec("1")).unwrap_err(),
        ValidationError::UnknownMember(stranger)
    );
}

#[test]
fn contributions_are_validated() {
    let pool = sample_pool(["1", "1"], ["0", "0"]);
    let payer = pool.members[1].id;
    let now = at(2026, 3, 2, 10);
    assert!(matches!(
        SettlementCalculator::add_contribution(&pool, Decimal::ZERO, "চাল", payer, now),
        Err(ValidationError::NonPositiveAmount { .. })
    ));
    assert_eq!(
        SettlementCalculator::add_contribution(&pool, dec("50"), "  ", payer, now).unwrap_err(),
        ValidationError::EmptyField("contribution description")
    );

    let pool = SettlementCalculator::add_contribution(&pool, dec("50"), "ডাল", payer, now).unwrap();
    assert_eq!(pool.contributed_by(payer), dec("50"));
    assert_eq!(pool.entries[0].description, "ডাল");
}

#[test]
fn added_members_join_the_split() {
    let pool = funded_pool(["10", "5"], ["0", "0"], &["1800"]);
    let (pool, id) = SettlementCalculator::add_member(&pool, "C", dec("200")).unwrap();
    let pool = SettlementCalculator::set_consumption_count(&pool, id, dec("3")).unwrap();

    assert_eq!(SettlementCalculator::unit_rate(&pool), dec("100"));
    let balances = SettlementCalculator::balances(&pool);
    assert_eq!(balances.len(), 3);
    assert_eq!(balances[2].name, "C");
    assert_eq!(balances[2].total, dec("500"));

    assert!(SettlementCalculator::add_member(&pool, "", Decimal::ZERO).is_err());
    assert!(SettlementCalculator::add_member(&pool, "D", dec("-1")).is_err());
}

#[test]
fn default_pool_has_two_placeholder_members() {
    let pool = ContributionPool::default();
    assert_eq!(pool.members.len(), 2);
    assert!(pool.entries.is_empty());
    assert_eq!(SettlementCalculator::unit_rate(&pool), Decimal::ZERO);
}
