use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::eligibility::domain::{EligibilityContext, LeaveInterval};
use crate::workflows::eligibility::evaluation::{EligibilityConfig, EligibilityEngine};
use crate::workflows::eligibility::router::eligibility_router;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig {
        minimum_years: 15,
        default_required_days: 60,
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(eligibility_config())
}

pub(super) fn leave(start: &str, end: &str) -> LeaveInterval {
    LeaveInterval::new(start, end)
}

pub(super) fn context_with_leaves(
    entry: &str,
    analysis: &str,
    leaves: Vec<LeaveInterval>,
) -> EligibilityContext {
    EligibilityContext::from_raw(entry, analysis, None, None, leaves)
}

pub(super) fn router_with_engine() -> axum::Router {
    eligibility_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
