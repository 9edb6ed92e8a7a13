use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tramites::config::AppConfig;
use tramites::workflows::eligibility::{
    EligibilityConfig, EligibilityEngine, LeaveInterval, Regime,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine from the env-backed policy defaults.
pub(crate) fn engine_from_config(config: &AppConfig) -> EligibilityEngine {
    EligibilityEngine::new(EligibilityConfig {
        minimum_years: config.eligibility.minimum_years,
        default_required_days: config.eligibility.required_days,
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_regime(raw: &str) -> Result<Regime, String> {
    raw.parse()
}

/// Parse one `START..END` capture passed via `--leave`. The CLI applies the
/// same guard as the capture form: ordered, parseable dates only.
pub(crate) fn parse_leave_span(raw: &str) -> Result<LeaveInterval, String> {
    let (start, end) = raw
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{raw}'"))?;
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;
    if end_date < start_date {
        return Err("the end date cannot precede the start date".to_string());
    }
    Ok(LeaveInterval::new(start.trim(), end.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_leave_span_accepts_ordered_ranges() {
        let interval = parse_leave_span("2020-01-10..2020-01-15").expect("span parses");
        assert_eq!(interval.start, "2020-01-10");
        assert_eq!(interval.end, "2020-01-15");
    }

    #[test]
    fn parse_leave_span_rejects_inverted_ranges() {
        let error = parse_leave_span("2020-01-15..2020-01-10").expect_err("inverted span");
        assert!(error.contains("cannot precede"));
    }

    #[test]
    fn parse_leave_span_rejects_missing_separator() {
        assert!(parse_leave_span("2020-01-15").is_err());
    }

    #[test]
    fn parse_regime_accepts_known_values() {
        assert_eq!(parse_regime("issste"), Ok(Regime::Issste));
        assert_eq!(parse_regime("IMSS"), Ok(Regime::Imss));
        assert!(parse_regime("other").is_err());
    }
}
