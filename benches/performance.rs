use std::str::FromStr;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocket_core::{
    core::services::BudgetLedger,
    domain::{AppSnapshot, BudgetPeriod, ExpenseItem},
    FixedClock, JsonSnapshotStore, SnapshotStore,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

const CATEGORIES: [&str; 3] = ["খাবার", "পরিবহন", "শপিং"];

fn seeded_period(items: usize) -> BudgetPeriod {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    let mut period =
        BudgetLedger::start_period("bench", Decimal::from(1_000_000), None, &clock).unwrap();
    let first_day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let price = Decimal::from_str("42.75").unwrap();
    for idx in 0..items {
        let item = ExpenseItem::new(
            format!("item-{idx}"),
            Decimal::ONE,
            "pc",
            price,
            CATEGORIES[idx % CATEGORIES.len()],
        )
        .unwrap();
        let date = first_day + Duration::days((idx % 30) as i64);
        period = BudgetLedger::record_expense_item(&period, item, date).unwrap();
    }
    period
}

fn bench_record_items(c: &mut Criterion) {
    c.bench_function("record_300_expense_items", |b| {
        b.iter(|| black_box(seeded_period(300)))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let store = JsonSnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();
    let mut snapshot = AppSnapshot::new();
    snapshot.personal.current_period = Some(seeded_period(300));

    c.bench_function("snapshot_save_load", |b| {
        b.iter(|| {
            store.save("bench", &snapshot).unwrap();
            black_box(store.load("bench").unwrap())
        })
    });
}

criterion_group!(benches, bench_record_items, bench_snapshot_io);
criterion_main!(benches);
