use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::calendar::pluralize;
use super::domain::{
    EligibilityContext, LeaveInterval, LeaveQuotaResult, Regime, RequirementResult,
    RequirementStatus,
};
use super::evaluation::{EligibilityEngine, EligibilityOutcome, MissingRequirement, TramiteVerdict};
use super::import::LeaveCsvImporter;
use super::intervals::IntervalView;

/// Router builder exposing the evaluation endpoint and the regime catalog.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/tramites/eligibility", post(evaluate_handler))
        .route("/api/v1/tramites/regimes", get(regimes_handler))
        .with_state(engine)
}

/// Raw form payload. Dates arrive as text and stay lenient: an unparseable
/// date degrades to a pending requirement rather than a 4xx. Only the bulk
/// CSV path rejects input, because it is a capture boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EligibilityRequest {
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub analysis_date: Option<String>,
    #[serde(default)]
    pub regime: Option<Regime>,
    #[serde(default)]
    pub required_days: Option<u32>,
    #[serde(default)]
    pub leaves: Vec<LeaveInterval>,
    #[serde(default)]
    pub leaves_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub required_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regime: Option<Regime>,
    pub tenure: RequirementView,
    pub leave_quota: LeaveQuotaView,
    pub intervals: Vec<IntervalView>,
    pub verdict: VerdictView,
}

/// Requirement result enriched with the display label for its status.
#[derive(Debug, Serialize)]
pub struct RequirementView {
    pub ready: bool,
    pub valid: bool,
    pub status: RequirementStatus,
    pub status_label: &'static str,
    pub description: String,
}

impl RequirementView {
    fn from_result(result: &RequirementResult) -> Self {
        Self {
            ready: result.ready,
            valid: result.valid,
            status: result.status,
            status_label: result.status.label(),
            description: result.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaveQuotaView {
    #[serde(flatten)]
    pub requirement: RequirementView,
    pub valid_days: u32,
}

impl LeaveQuotaView {
    fn from_result(result: &LeaveQuotaResult) -> Self {
        Self {
            requirement: RequirementView::from_result(&result.requirement),
            valid_days: result.valid_days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerdictView {
    pub status: &'static str,
    pub summary: String,
    pub missing: Vec<String>,
}

impl VerdictView {
    fn from_verdict(verdict: &TramiteVerdict) -> Self {
        let missing = match verdict {
            TramiteVerdict::Rejected { missing } => {
                missing.iter().map(MissingRequirement::label).collect()
            }
            _ => Vec::new(),
        };

        Self {
            status: verdict.status_tag(),
            summary: verdict.summary(),
            missing,
        }
    }
}

/// One entry of the regime catalog the UI selector binds to.
#[derive(Debug, Serialize)]
pub struct RegimeView {
    pub value: Regime,
    pub label: &'static str,
    pub display: String,
    pub required_days: u32,
}

impl EligibilityResponse {
    fn from_outcome(regime: Option<Regime>, outcome: &EligibilityOutcome) -> Self {
        Self {
            required_days: outcome.required_days,
            regime,
            tenure: RequirementView::from_result(&outcome.tenure),
            leave_quota: LeaveQuotaView::from_result(&outcome.leave_quota),
            intervals: outcome.intervals.clone(),
            verdict: VerdictView::from_verdict(&outcome.verdict),
        }
    }
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(request): Json<EligibilityRequest>,
) -> Response {
    let EligibilityRequest {
        entry_date,
        analysis_date,
        regime,
        required_days,
        mut leaves,
        leaves_csv,
    } = request;

    if let Some(csv) = leaves_csv {
        match LeaveCsvImporter::from_reader(Cursor::new(csv.into_bytes())) {
            Ok(imported) => leaves.extend(imported),
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        }
    }
    leaves.sort_by(|a, b| a.start.cmp(&b.start));

    let context = EligibilityContext::from_raw(
        entry_date.as_deref().unwrap_or(""),
        analysis_date.as_deref().unwrap_or(""),
        regime,
        required_days,
        leaves,
    );
    let outcome = engine.evaluate(&context);

    (
        StatusCode::OK,
        Json(EligibilityResponse::from_outcome(regime, &outcome)),
    )
        .into_response()
}

pub(crate) async fn regimes_handler() -> Json<Vec<RegimeView>> {
    let catalog = Regime::ordered()
        .iter()
        .map(|regime| {
            let days = regime.required_days();
            RegimeView {
                value: *regime,
                label: regime.label(),
                display: format!(
                    "{} · {} {} requeridos",
                    regime.label(),
                    days,
                    pluralize("día", days)
                ),
                required_days: days,
            }
        })
        .collect();

    Json(catalog)
}
