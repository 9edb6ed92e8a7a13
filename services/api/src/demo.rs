use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use tramites::config::AppConfig;
use tramites::error::AppError;
use tramites::workflows::eligibility::calendar::{format_display_date, pluralize};
use tramites::workflows::eligibility::{
    EligibilityContext, EligibilityOutcome, LeaveCsvImporter, LeaveInterval, Regime,
};

use crate::infra::engine_from_config;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Entry-into-service date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) entry_date: NaiveDate,
    /// Analysis date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) analysis_date: Option<NaiveDate>,
    /// Policy regime selecting the day quota (issste or imss)
    #[arg(long, value_parser = crate::infra::parse_regime)]
    pub(crate) regime: Option<Regime>,
    /// Explicit day-quota override
    #[arg(long)]
    pub(crate) required_days: Option<u32>,
    /// Leave interval as START..END; repeat for multiple captures
    #[arg(long = "leave", value_parser = crate::infra::parse_leave_span)]
    pub(crate) leaves: Vec<LeaveInterval>,
    /// Optional CSV export (inicio,fin) with bulk captures
    #[arg(long)]
    pub(crate) leaves_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the analysis date of the scripted scenario (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_evaluation(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        entry_date,
        analysis_date,
        regime,
        required_days,
        mut leaves,
        leaves_csv,
    } = args;

    let analysis_date = analysis_date.unwrap_or_else(|| Local::now().date_naive());
    if let Some(path) = leaves_csv {
        leaves.extend(LeaveCsvImporter::from_path(path)?);
    }
    leaves.sort_by(|a, b| a.start.cmp(&b.start));

    let config = AppConfig::load()?;
    let engine = engine_from_config(&config);
    let context = EligibilityContext {
        entry_date: Some(entry_date),
        analysis_date: Some(analysis_date),
        regime,
        required_days,
        leaves,
    };

    let outcome = engine.evaluate(&context);
    render_evaluation(&context, &outcome);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let analysis = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Demo del analizador de requisitos");

    let config = AppConfig::load()?;
    let engine = engine_from_config(&config);
    let context = EligibilityContext {
        entry_date: NaiveDate::from_ymd_opt(2008, 9, 1),
        analysis_date: Some(analysis),
        regime: Some(Regime::Issste),
        required_days: None,
        leaves: vec![
            LeaveInterval::new("2021-02-01", "2021-03-15"),
            LeaveInterval::new("2022-10-10", "2022-11-05"),
        ],
    };

    let outcome = engine.evaluate(&context);
    render_evaluation(&context, &outcome);

    Ok(())
}

fn render_evaluation(context: &EligibilityContext, outcome: &EligibilityOutcome) {
    println!("Analizador de requisitos del trámite");
    if let Some(entry) = context.entry_date {
        println!("Fecha de ingreso: {}", format_display_date(entry));
    }
    if let Some(analysis) = context.analysis_date {
        println!("Fecha de análisis: {}", format_display_date(analysis));
    }
    if let Some(regime) = context.regime {
        println!("Régimen: {}", regime.label());
    }
    println!(
        "Meta actual: {} {} requeridos",
        outcome.required_days,
        pluralize("día", outcome.required_days)
    );

    println!("\nRequisitos");
    println!(
        "- Años de servicio [{}]: {}",
        outcome.tenure.status.label(),
        outcome.tenure.description
    );
    println!(
        "- Días de licencia [{}]: {}",
        outcome.leave_quota.requirement.status.label(),
        outcome.leave_quota.requirement.description
    );

    if outcome.intervals.is_empty() {
        println!("\nLicencias: ninguna capturada");
    } else {
        println!("\nLicencias");
        for view in &outcome.intervals {
            println!(
                "- Del {} al {} | {} {} | {} {} válidos | {}: {}",
                display_date(&view.start),
                display_date(&view.end),
                view.total_days,
                pluralize("día", view.total_days),
                view.valid_days,
                pluralize("día", view.valid_days),
                view.status_label,
                view.detail
            );
        }
    }

    println!(
        "\nTotal válido: {} {}",
        outcome.leave_quota.valid_days,
        pluralize("día", outcome.leave_quota.valid_days)
    );
    println!("Resultado: {}", outcome.verdict.summary());
}

fn display_date(raw: &str) -> String {
    tramites::workflows::eligibility::calendar::parse_iso_date(raw)
        .map(format_display_date)
        .unwrap_or_else(|| "Fecha inválida".to_string())
}
