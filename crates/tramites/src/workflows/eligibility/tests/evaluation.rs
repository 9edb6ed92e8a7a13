use super::common::*;
use crate::workflows::eligibility::domain::{EligibilityContext, Regime, RequirementStatus};
use crate::workflows::eligibility::evaluation::rules::{evaluate_leave_quota, evaluate_tenure};
use crate::workflows::eligibility::evaluation::{MissingRequirement, TramiteVerdict};

#[test]
fn tenure_is_met_after_fifteen_years_of_service() {
    let result = evaluate_tenure(Some(date(2010, 1, 1)), Some(date(2025, 1, 2)), 15);

    assert!(result.ready);
    assert!(result.valid);
    assert_eq!(result.status, RequirementStatus::Met);
    assert!(result.description.contains("Cumple"));
    assert!(result.description.contains("15 años"));
}

#[test]
fn tenure_is_met_exactly_on_the_anniversary() {
    let result = evaluate_tenure(Some(date(2010, 1, 1)), Some(date(2025, 1, 1)), 15);

    assert!(result.valid, "threshold boundary is inclusive");
}

#[test]
fn tenure_flags_inconsistent_analysis_dates() {
    let result = evaluate_tenure(Some(date(2010, 1, 1)), Some(date(2009, 12, 31)), 15);

    assert!(!result.ready);
    assert!(!result.valid);
    assert_eq!(result.status, RequirementStatus::Inconsistent);
    assert!(result.description.contains("anterior a la fecha de ingreso"));
}

#[test]
fn tenure_reports_the_days_still_missing() {
    let result = evaluate_tenure(Some(date(2010, 1, 1)), Some(date(2024, 12, 31)), 15);

    assert!(result.ready);
    assert!(!result.valid);
    assert_eq!(result.status, RequirementStatus::NotMet);
    assert!(result.description.contains("Faltan"));
    assert!(result.description.contains("1 día"));
}

#[test]
fn tenure_is_pending_without_both_dates() {
    let missing_analysis = evaluate_tenure(Some(date(2010, 1, 1)), None, 15);
    let missing_entry = evaluate_tenure(None, Some(date(2025, 1, 1)), 15);

    for result in [missing_analysis, missing_entry] {
        assert!(!result.ready);
        assert!(!result.valid);
        assert_eq!(result.status, RequirementStatus::Pending);
    }
}

#[test]
fn tenure_validity_is_monotonic_in_the_analysis_date() {
    let entry = Some(date(2010, 1, 1));
    let mut previous_valid = false;

    for analysis in [
        date(2024, 6, 1),
        date(2024, 12, 31),
        date(2025, 1, 1),
        date(2025, 6, 1),
        date(2030, 1, 1),
    ] {
        let valid = evaluate_tenure(entry, Some(analysis), 15).valid;
        assert!(
            valid || !previous_valid,
            "validity regressed at {analysis}"
        );
        previous_valid = valid;
    }
}

#[test]
fn leave_quota_sums_truncated_intervals_independently() {
    let leaves = vec![
        leave("2020-01-10", "2020-01-15"),
        leave("2019-12-28", "2020-01-03"),
    ];

    let result = evaluate_leave_quota(Some(date(2020, 1, 1)), &leaves, 8);

    assert_eq!(result.valid_days, 8);
    assert!(result.requirement.ready);
    assert!(result.requirement.valid);
    assert_eq!(result.requirement.status, RequirementStatus::Met);
    assert!(result.requirement.description.contains("8 días válidos"));
}

#[test]
fn leave_quota_reports_the_remaining_days() {
    let leaves = vec![
        leave("2020-01-10", "2020-01-15"),
        leave("2019-12-28", "2020-01-03"),
    ];

    let result = evaluate_leave_quota(Some(date(2020, 1, 1)), &leaves, 12);

    assert_eq!(result.valid_days, 8);
    assert!(result.requirement.ready);
    assert!(!result.requirement.valid);
    assert!(result.requirement.description.contains("Faltan"));
    assert!(result.requirement.description.contains("4 días"));
}

#[test]
fn leave_quota_never_passes_on_an_empty_collection() {
    // Even a zero quota demands evidence.
    let result = evaluate_leave_quota(Some(date(2020, 1, 1)), &[], 0);

    assert!(!result.requirement.ready);
    assert!(!result.requirement.valid);
    assert_eq!(result.valid_days, 0);
    assert_eq!(
        result.requirement.description,
        "No hay licencias capturadas."
    );
}

#[test]
fn leave_quota_is_pending_without_an_entry_date() {
    let leaves = vec![leave("2020-01-10", "2020-01-15")];
    let result = evaluate_leave_quota(None, &leaves, 60);

    assert!(!result.requirement.ready);
    assert_eq!(result.requirement.status, RequirementStatus::Pending);
    assert_eq!(result.valid_days, 0);
}

#[test]
fn leave_quota_valid_days_never_decrease_as_intervals_accumulate() {
    let entry = Some(date(2020, 1, 1));
    let additions = [
        leave("2019-01-01", "2019-02-01"),
        leave("2020-01-10", "2020-01-15"),
        leave("2019-12-28", "2020-01-03"),
        leave("2020-01-12", "2020-01-14"),
    ];

    let mut leaves = Vec::new();
    let mut previous = 0;
    for addition in additions {
        leaves.push(addition);
        let valid_days = evaluate_leave_quota(entry, &leaves, 60).valid_days;
        assert!(valid_days >= previous, "valid days shrank at {leaves:?}");
        previous = valid_days;
    }
}

#[test]
fn overlapping_intervals_double_count() {
    let leaves = vec![
        leave("2020-01-10", "2020-01-15"),
        leave("2020-01-10", "2020-01-15"),
    ];

    let result = evaluate_leave_quota(Some(date(2020, 1, 1)), &leaves, 60);

    assert_eq!(result.valid_days, 12);
}

#[test]
fn engine_resolves_the_quota_from_override_regime_and_default() {
    let engine = engine();

    let mut context = EligibilityContext::default();
    assert_eq!(engine.required_days_for(&context), 60);

    context.regime = Some(Regime::Imss);
    assert_eq!(engine.required_days_for(&context), 90);

    context.required_days = Some(100);
    assert_eq!(engine.required_days_for(&context), 100);
}

#[test]
fn engine_approves_when_both_requirements_hold() {
    let engine = engine();
    let context = context_with_leaves(
        "2010-01-01",
        "2025-06-01",
        vec![leave("2020-01-10", "2020-03-31")],
    );

    let outcome = engine.evaluate(&context);

    assert!(outcome.tenure.valid);
    assert_eq!(outcome.leave_quota.valid_days, 82);
    assert_eq!(outcome.verdict, TramiteVerdict::Approved);
    assert_eq!(
        outcome.verdict.summary(),
        "Aprobado: ambos requisitos se cumplen."
    );
}

#[test]
fn engine_rejection_names_every_failed_requirement() {
    let engine = engine();
    // Ten years of service and a single short leave: both requirements fail.
    let context = context_with_leaves(
        "2015-01-01",
        "2025-01-02",
        vec![leave("2020-01-10", "2020-01-15")],
    );

    let outcome = engine.evaluate(&context);

    match &outcome.verdict {
        TramiteVerdict::Rejected { missing } => {
            assert_eq!(
                missing,
                &vec![
                    MissingRequirement::Tenure { minimum_years: 15 },
                    MissingRequirement::LeaveQuota,
                ]
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(
        outcome.verdict.summary(),
        "No aprobado: falta cumplir 15 años de servicio y los días de licencia requeridos."
    );
}

#[test]
fn engine_withholds_the_verdict_until_both_requirements_are_ready() {
    let engine = engine();
    let context = context_with_leaves("", "2025-01-02", vec![leave("2020-01-10", "2020-01-15")]);

    let outcome = engine.evaluate(&context);

    assert_eq!(outcome.verdict, TramiteVerdict::Incomplete);
    assert!(outcome.verdict.summary().contains("Captura todos los datos"));
}

#[test]
fn engine_builds_one_view_per_captured_interval() {
    let engine = engine();
    let context = context_with_leaves(
        "2020-01-01",
        "2025-01-02",
        vec![
            leave("2019-12-28", "2020-01-03"),
            leave("2020-01-10", "2020-01-15"),
        ],
    );

    let outcome = engine.evaluate(&context);

    assert_eq!(outcome.intervals.len(), 2);
    assert_eq!(outcome.intervals[0].status_label, "Parcial");
    assert_eq!(outcome.intervals[1].status_label, "Válido");
}
