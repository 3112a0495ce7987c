//! Shared grocery pool ("bazar") and meal-count members for mess settlement.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    /// Accumulated consumption units (meals). Never negative.
    #[serde(default)]
    pub consumption: Decimal,
    #[serde(default)]
    pub fixed_cost: Decimal,
}

impl Member {
    pub fn new(name: impl Into<String>, fixed_cost: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            consumption: Decimal::ZERO,
            fixed_cost,
        }
    }
}

impl Identifiable for Member {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Member {
    fn name(&self) -> &str {
        &self.name
    }
}

/// One purchase paid into the shared pool by a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BazarEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub amount: Decimal,
    pub description: String,
    pub contributor_id: Uuid,
}

impl Identifiable for BazarEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for BazarEntry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Contributions plus the members they are split across.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributionPool {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub entries: Vec<BazarEntry>,
}

impl ContributionPool {
    /// A pool with no members and no entries.
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        find_by_id(&self.members, id)
    }

    pub(crate) fn member_mut(&mut self, id: Uuid) -> Option<&mut Member> {
        find_by_id_mut(&mut self.members, id)
    }

    pub fn total_contributions(&self) -> Decimal {
        sum_amounts(&self.entries)
    }

    pub fn total_consumption(&self) -> Decimal {
        self.members.iter().map(|member| member.consumption).sum()
    }

    pub fn total_fixed_costs(&self) -> Decimal {
        self.members.iter().map(|member| member.fixed_cost).sum()
    }

    /// Sum of entries paid in by `member_id`.
    pub fn contributed_by(&self, member_id: Uuid) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| entry.contributor_id == member_id)
            .map(|entry| entry.amount)
            .sum()
    }
}

/// What one member owes for the current pool state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberBalance {
    pub member_id: Uuid,
    pub name: String,
    pub consumption: Decimal,
    pub consumption_cost: Decimal,
    pub fixed_cost: Decimal,
    pub total: Decimal,
}

/// Two placeholder members, no entries.
impl Default for ContributionPool {
    fn default() -> Self {
        Self {
            members: vec![
                Member::new("সদস্য ১", Decimal::ZERO),
                Member::new("সদস্য ২", Decimal::ZERO),
            ],
            entries: Vec::new(),
        }
    }
}
