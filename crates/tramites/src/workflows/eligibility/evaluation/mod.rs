mod config;
mod policy;
pub(crate) mod rules;

pub use config::EligibilityConfig;
pub use policy::{MissingRequirement, TramiteVerdict};

use serde::Serialize;

use super::domain::{EligibilityContext, LeaveQuotaResult, RequirementResult};
use super::intervals::IntervalView;
use policy::decide_verdict;

/// Stateless evaluator that applies the policy thresholds to one context.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Resolve the day quota for a context: an explicit override wins, then
    /// the selected regime, then the configured default.
    pub fn required_days_for(&self, context: &EligibilityContext) -> u32 {
        context
            .required_days
            .or_else(|| context.regime.map(|regime| regime.required_days()))
            .unwrap_or(self.config.default_required_days)
    }

    pub fn evaluate(&self, context: &EligibilityContext) -> EligibilityOutcome {
        let required_days = self.required_days_for(context);

        let tenure = rules::evaluate_tenure(
            context.entry_date,
            context.analysis_date,
            self.config.minimum_years,
        );
        let leave_quota =
            rules::evaluate_leave_quota(context.entry_date, &context.leaves, required_days);
        let intervals = context
            .leaves
            .iter()
            .map(|leave| IntervalView::build(leave, context.entry_date))
            .collect();
        let verdict = decide_verdict(&tenure, &leave_quota, self.config.minimum_years);

        EligibilityOutcome {
            required_days,
            tenure,
            leave_quota,
            intervals,
            verdict,
        }
    }
}

/// Evaluation output bundling both requirement results, the per-interval
/// table rows, and the composite verdict.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityOutcome {
    pub required_days: u32,
    pub tenure: RequirementResult,
    pub leave_quota: LeaveQuotaResult,
    pub intervals: Vec<IntervalView>,
    pub verdict: TramiteVerdict,
}
