//! Personal-mode bookkeeping around the ledger: the current period and its history.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{common::find_by_id_mut, period::BudgetPeriod, snapshot::PersonalData},
    errors::ValidationError,
};

use super::ServiceResult;

pub struct PersonalService;

impl PersonalService {
    /// `true` when there is no current period or it has already ended.
    pub fn can_start_period(personal: &PersonalData, now: DateTime<Utc>) -> bool {
        personal
            .current_period
            .as_ref()
            .map_or(true, |period| period.is_expired(now))
    }

    /// Installs `period` as current and archives the one it supersedes.
    ///
    /// Refused while the current period is still running.
    pub fn begin_period(
        personal: &PersonalData,
        period: BudgetPeriod,
        now: DateTime<Utc>,
    ) -> ServiceResult<PersonalData> {
        if let Some(active) = personal.current_period.as_ref() {
            if !active.is_expired(now) {
                return Err(ValidationError::ActivePeriod {
                    id: active.id,
                    ends_at: active.end,
                });
            }
        }

        let mut updated = personal.clone();
        if let Some(mut finished) = updated.current_period.take() {
            finished.is_completed = true;
            info!(period_id = %finished.id, spent = %finished.total_spent, "budget period archived");
            updated.history.push(finished);
        }
        updated.current_period = Some(period);
        Ok(updated)
    }

    pub fn find_period(personal: &PersonalData, id: Uuid) -> Option<&BudgetPeriod> {
        personal.period(id)
    }

    /// Writes an updated period back into whichever slot holds its id.
    pub fn replace_period(
        personal: &PersonalData,
        period: BudgetPeriod,
    ) -> ServiceResult<PersonalData> {
        let mut updated = personal.clone();
        if let Some(current) = updated
            .current_period
            .as_mut()
            .filter(|current| current.id == period.id)
        {
            *current = period;
            return Ok(updated);
        }
        let slot = find_by_id_mut(&mut updated.history, period.id).ok_or(
            ValidationError::UnknownReference {
                kind: "budget period",
                id: period.id,
            },
        )?;
        *slot = period;
        Ok(updated)
    }

    /// Every known period, newest first: the current one, then history in reverse.
    pub fn all_periods(personal: &PersonalData) -> Vec<&BudgetPeriod> {
        personal
            .current_period
            .iter()
            .chain(personal.history.iter().rev())
            .collect()
    }
}
