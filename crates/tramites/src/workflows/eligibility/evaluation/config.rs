use serde::{Deserialize, Serialize};

/// Policy thresholds applied by the eligibility engine.
///
/// `minimum_years` is the tenure floor; `default_required_days` is the leave
/// quota used when a context selects neither a regime nor an explicit quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_years: i32,
    pub default_required_days: u32,
}
