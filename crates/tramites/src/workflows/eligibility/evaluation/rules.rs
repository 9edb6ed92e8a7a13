use chrono::NaiveDate;

use super::super::calendar::{add_years, days_between, describe_duration, pluralize};
use super::super::domain::{LeaveInterval, LeaveQuotaResult, RequirementResult, RequirementStatus};
use super::super::intervals::valid_day_count;

/// Minimum-years-of-service state machine.
///
/// Absent dates leave the requirement pending; an analysis date earlier than
/// the entry date is flagged inconsistent and also marks the result not
/// ready, because the analysis anchor cannot be trusted. Reaching the
/// threshold on the exact anniversary counts as met.
pub(crate) fn evaluate_tenure(
    entry: Option<NaiveDate>,
    analysis: Option<NaiveDate>,
    minimum_years: i32,
) -> RequirementResult {
    let (entry, analysis) = match (entry, analysis) {
        (Some(entry), Some(analysis)) => (entry, analysis),
        _ => {
            return RequirementResult {
                ready: false,
                valid: false,
                status: RequirementStatus::Pending,
                description: "Captura la fecha de ingreso y la fecha de análisis.".to_string(),
            }
        }
    };

    if analysis < entry {
        return RequirementResult {
            ready: false,
            valid: false,
            status: RequirementStatus::Inconsistent,
            description: "La fecha de análisis no puede ser anterior a la fecha de ingreso."
                .to_string(),
        };
    }

    let threshold = add_years(entry, minimum_years);
    let valid = analysis >= threshold;
    let description = if valid {
        format!("Cumple: {} de servicio.", describe_duration(entry, analysis))
    } else {
        let pending_days = days_between(analysis, threshold);
        format!(
            "Faltan {} {} para llegar al mínimo.",
            pending_days,
            pluralize("día", pending_days)
        )
    };

    RequirementResult {
        ready: true,
        valid,
        status: if valid {
            RequirementStatus::Met
        } else {
            RequirementStatus::NotMet
        },
        description,
    }
}

/// Leave-day quota state machine.
///
/// Sums the truncated valid range of each interval independently; overlapping
/// intervals double-count on purpose. An empty collection is never
/// satisfying, whatever the quota: the requirement asks for evidence, not
/// merely a number.
pub(crate) fn evaluate_leave_quota(
    entry: Option<NaiveDate>,
    leaves: &[LeaveInterval],
    required_days: u32,
) -> LeaveQuotaResult {
    let entry = match entry {
        Some(entry) => entry,
        None => {
            return LeaveQuotaResult {
                requirement: RequirementResult {
                    ready: false,
                    valid: false,
                    status: RequirementStatus::Pending,
                    description: "Captura la fecha de ingreso para validar los días de licencia."
                        .to_string(),
                },
                valid_days: 0,
            }
        }
    };

    let valid_days: u32 = leaves
        .iter()
        .map(|leave| valid_day_count(leave.start_date(), leave.end_date(), Some(entry)))
        .sum();

    let valid = valid_days >= required_days && !leaves.is_empty();
    let (status, description) = if leaves.is_empty() {
        (
            RequirementStatus::Pending,
            "No hay licencias capturadas.".to_string(),
        )
    } else if valid {
        (
            RequirementStatus::Met,
            format!(
                "Cumple con {} {} válidos.",
                valid_days,
                pluralize("día", valid_days)
            ),
        )
    } else {
        let remaining = required_days.saturating_sub(valid_days);
        (
            RequirementStatus::NotMet,
            format!(
                "Faltan {} {} válidos.",
                remaining,
                pluralize("día", remaining)
            ),
        )
    };

    LeaveQuotaResult {
        requirement: RequirementResult {
            ready: !leaves.is_empty(),
            valid,
            status,
            description,
        },
        valid_days,
    }
}
