use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{add_days, inclusive_day_count};
use super::domain::LeaveInterval;

/// Sub-range of a leave interval that counts toward the quota.
///
/// Only days strictly after the entry date accrue: the entry date itself is
/// the boundary of service and must not be credited as a leave day. Returns
/// `None` when no day of the interval survives the cut.
pub fn valid_range(
    start: NaiveDate,
    end: NaiveDate,
    entry: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    if end < entry {
        return None;
    }
    let effective_start = if start <= entry {
        add_days(entry, 1)
    } else {
        start
    };
    if effective_start > end {
        return None;
    }
    Some((effective_start, end))
}

/// Countable days of one interval. Absent dates always contribute 0.
pub fn valid_day_count(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    entry: Option<NaiveDate>,
) -> u32 {
    match (start, end, entry) {
        (Some(start), Some(end), Some(entry)) => {
            valid_range(start, end, entry).map_or(0, |(from, to)| inclusive_day_count(from, to))
        }
        _ => 0,
    }
}

/// Badge classification for one captured interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalStatus {
    Error,
    Pending,
    Invalid,
    Partial,
    Valid,
}

impl IntervalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            IntervalStatus::Error => "Error",
            IntervalStatus::Pending => "Pendiente",
            IntervalStatus::Invalid => "No válido",
            IntervalStatus::Partial => "Parcial",
            IntervalStatus::Valid => "Válido",
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            IntervalStatus::Error => "Fechas incompletas.",
            IntervalStatus::Pending => "Ingresa la fecha de ingreso para validar.",
            IntervalStatus::Invalid => "Todo el periodo es anterior a la fecha de ingreso.",
            IntervalStatus::Partial => {
                "Solo se contabilizan los días posteriores a la fecha de ingreso."
            }
            IntervalStatus::Valid => "El periodo completo ocurre después de la fecha de ingreso.",
        }
    }
}

/// Classify one interval against the entry date.
///
/// The checks are ordered: malformed dates win over a missing entry date,
/// which wins over the positional outcomes.
pub fn classify_interval(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    entry: Option<NaiveDate>,
) -> IntervalStatus {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return IntervalStatus::Error,
    };
    let entry = match entry {
        Some(entry) => entry,
        None => return IntervalStatus::Pending,
    };

    if end < entry {
        IntervalStatus::Invalid
    } else if start <= entry {
        IntervalStatus::Partial
    } else {
        IntervalStatus::Valid
    }
}

/// Per-interval record for table rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalView {
    pub start: String,
    pub end: String,
    pub total_days: u32,
    pub valid_days: u32,
    pub status: IntervalStatus,
    pub status_label: &'static str,
    pub detail: &'static str,
}

impl IntervalView {
    pub fn build(interval: &LeaveInterval, entry: Option<NaiveDate>) -> Self {
        let start = interval.start_date();
        let end = interval.end_date();

        let total_days = match (start, end) {
            (Some(start), Some(end)) => inclusive_day_count(start, end),
            _ => 0,
        };
        let valid_days = valid_day_count(start, end, entry);
        let status = classify_interval(start, end, entry);

        Self {
            start: interval.start.clone(),
            end: interval.end.clone(),
            total_days,
            valid_days,
            status,
            status_label: status.label(),
            detail: status.detail(),
        }
    }
}
