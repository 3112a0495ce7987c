//! Splits the shared grocery pool across members by meal count.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        common::{checked_total, is_present},
        settlement::{BazarEntry, ContributionPool, Member, MemberBalance},
    },
    errors::ValidationError,
};

use super::ServiceResult;

/// Pure settlement arithmetic over a [`ContributionPool`].
///
/// Balances are derived on every read and never stored, so any change to
/// the entries or meal counts is reflected for every member at once.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Pool total divided by total consumption; zero when nothing was consumed.
    ///
    /// Saturates at `Decimal::MAX` when a tiny consumption total would overflow the quotient.
    pub fn unit_rate(pool: &ContributionPool) -> Decimal {
        let consumption = pool.total_consumption();
        if consumption.is_zero() {
            return Decimal::ZERO;
        }
        pool.total_contributions()
            .checked_div(consumption)
            .unwrap_or(Decimal::MAX)
    }

    /// `unit_rate × member.consumption + member.fixed_cost`.
    pub fn member_balance(pool: &ContributionPool, member: &Member) -> Decimal {
        Self::unit_rate(pool)
            .saturating_mul(member.consumption)
            .saturating_add(member.fixed_cost)
    }

    /// Breakdown of what every member owes, in member order.
    pub fn balances(pool: &ContributionPool) -> Vec<MemberBalance> {
        let rate = Self::unit_rate(pool);
        pool.members
            .iter()
            .map(|member| {
                let consumption_cost = rate.saturating_mul(member.consumption);
                MemberBalance {
                    member_id: member.id,
                    name: member.name.clone(),
                    consumption: member.consumption,
                    consumption_cost,
                    fixed_cost: member.fixed_cost,
                    total: consumption_cost.saturating_add(member.fixed_cost),
                }
            })
            .collect()
    }

    /// Appends a contribution. Balances are not touched; read them on demand.
    pub fn add_contribution(
        pool: &ContributionPool,
        amount: Decimal,
        description: &str,
        contributor_id: Uuid,
        timestamp: DateTime<Utc>,
    ) -> ServiceResult<ContributionPool> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "contribution amount",
                value: amount,
            });
        }
        if !is_present(description) {
            return Err(ValidationError::EmptyField("contribution description"));
        }
        if pool.member(contributor_id).is_none() {
            return Err(ValidationError::UnknownMember(contributor_id));
        }
        if pool.total_contributions().checked_add(amount).is_none() {
            return Err(ValidationError::AmountOverflow {
                field: "pool total",
            });
        }

        let entry = BazarEntry {
            id: Uuid::new_v4(),
            timestamp,
            amount,
            description: description.trim().to_string(),
            contributor_id,
        };
        debug!(entry_id = %entry.id, %amount, contributor = %contributor_id, "contribution added");
        let mut updated = pool.clone();
        updated.entries.push(entry);
        Ok(updated)
    }

    /// Replaces a member's consumption count; negative counts are stored as zero.
    pub fn set_consumption_count(
        pool: &ContributionPool,
        member_id: Uuid,
        count: Decimal,
    ) -> ServiceResult<ContributionPool> {
        let count = count.max(Decimal::ZERO);
        let mut updated = pool.clone();
        let member = updated
            .member_mut(member_id)
            .ok_or(ValidationError::UnknownMember(member_id))?;
        member.consumption = count;
        if checked_total(updated.members.iter().map(|member| member.consumption)).is_none() {
            return Err(ValidationError::AmountOverflow {
                field: "total consumption",
            });
        }
        Ok(updated)
    }

    /// Adds a member with zero consumption and the given fixed cost.
    pub fn add_member(
        pool: &ContributionPool,
        name: &str,
        fixed_cost: Decimal,
    ) -> ServiceResult<(ContributionPool, Uuid)> {
        if !is_present(name) {
            return Err(ValidationError::EmptyField("member name"));
        }
        if fixed_cost < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "fixed cost",
                value: fixed_cost,
            });
        }
        if pool.total_fixed_costs().checked_add(fixed_cost).is_none() {
            return Err(ValidationError::AmountOverflow {
                field: "total fixed costs",
            });
        }
        let member = Member::new(name.trim(), fixed_cost);
        let id = member.id;
        let mut updated = pool.clone();
        updated.members.push(member);
        Ok((updated, id))
    }
}
