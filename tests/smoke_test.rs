mod common;

use common::{at, day, dec, item};
use pocket_core::{
    config::Config,
    core::services::{
        BudgetLedger, PersonalService, ReminderEvaluator, SettlementCalculator,
    },
    domain::{AppSnapshot, BillReminder},
    init, FixedClock,
};

#[test]
fn a_month_of_use_smoke() {
    init();

    let config = Config::default();
    let clock = FixedClock(at(2026, 3, 1, 6));
    let mut snapshot = AppSnapshot::new();

    let mut categories = config.category_skeleton();
    categories[0].limit = dec("9000");
    let period = BudgetLedger::start_period("মার্চ", dec("20000"), Some(categories), &clock)
        .expect("start");
    let period =
        BudgetLedger::record_expense_item(&period, item("সবজি", "1", "120", "খাবার"), day(2026, 3, 1))
            .expect("record");
    snapshot.personal =
        PersonalService::begin_period(&snapshot.personal, period, clock.0).expect("begin");

    let members: Vec<_> = snapshot.mess.members.iter().map(|m| m.id).collect();
    for (id, meals) in members.iter().zip(["20", "10"]) {
        snapshot.mess =
            SettlementCalculator::set_consumption_count(&snapshot.mess, *id, dec(meals)).unwrap();
    }
    snapshot.mess = SettlementCalculator::add_contribution(
        &snapshot.mess,
        dec("3000"),
        "মাসিক বাজার",
        members[0],
        clock.0,
    )
    .unwrap();

    let mut alerts = Vec::new();
    let mut sink = |bill: &BillReminder| alerts.push(bill.kind);
    snapshot.family = ReminderEvaluator::scan(
        &snapshot.family,
        clock.0,
        config.reminder_threshold_days,
        &mut sink,
    );

    let period = snapshot.personal.current_period.as_ref().unwrap();
    assert_eq!(config.format_amount(period.remaining_budget), "৳19,880.00");
    assert_eq!(SettlementCalculator::unit_rate(&snapshot.mess), dec("100"));
    assert!(alerts.is_empty());
}
