use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::parse_iso_date;

/// One captured medical-leave period.
///
/// Dates stay as the raw `YYYY-MM-DD` text the caller supplied; the evaluator
/// parses them leniently so a half-typed interval degrades instead of
/// aborting the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    pub start: String,
    pub end: String,
}

impl LeaveInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.end)
    }
}

/// Status vocabulary shared by both requirement evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Pending,
    Inconsistent,
    NotMet,
    Met,
}

impl RequirementStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RequirementStatus::Pending => "Pendiente",
            RequirementStatus::Inconsistent => "Inconsistente",
            RequirementStatus::NotMet => "No cumple",
            RequirementStatus::Met => "Cumple",
        }
    }
}

/// Outcome of evaluating a single requirement. Immutable snapshot; every
/// evaluation pass builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementResult {
    pub ready: bool,
    pub valid: bool,
    pub status: RequirementStatus,
    pub description: String,
}

/// The leave-quota requirement additionally reports the aggregate day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveQuotaResult {
    #[serde(flatten)]
    pub requirement: RequirementResult,
    pub valid_days: u32,
}

/// Named policy regimes selecting the required leave-day quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Issste,
    Imss,
}

impl Regime {
    pub const fn ordered() -> [Self; 2] {
        [Self::Issste, Self::Imss]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Regime::Issste => "ISSSTE",
            Regime::Imss => "IMSS",
        }
    }

    pub const fn required_days(self) -> u32 {
        match self {
            Regime::Issste => 60,
            Regime::Imss => 90,
        }
    }
}

impl std::str::FromStr for Regime {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "issste" => Ok(Self::Issste),
            "imss" => Ok(Self::Imss),
            other => Err(format!("unknown regime '{other}', expected issste or imss")),
        }
    }
}

/// Inputs to one evaluation pass. Rebuilt from caller-held state on every
/// edit; the evaluator keeps nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct EligibilityContext {
    pub entry_date: Option<NaiveDate>,
    pub analysis_date: Option<NaiveDate>,
    pub regime: Option<Regime>,
    pub required_days: Option<u32>,
    pub leaves: Vec<LeaveInterval>,
}

impl EligibilityContext {
    /// Build a context from the raw form fields the caller submits.
    /// Unparseable dates degrade to absence; they never abort an evaluation.
    pub fn from_raw(
        entry_date: &str,
        analysis_date: &str,
        regime: Option<Regime>,
        required_days: Option<u32>,
        leaves: Vec<LeaveInterval>,
    ) -> Self {
        Self {
            entry_date: parse_iso_date(entry_date),
            analysis_date: parse_iso_date(analysis_date),
            regime,
            required_days,
            leaves,
        }
    }
}
