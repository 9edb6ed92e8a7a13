//! Eligibility analysis for medical-leave licensing procedures.
//!
//! The evaluator is a set of pure functions over caller-supplied dates and
//! leave intervals: calendar primitives, per-interval validity truncation,
//! the two requirement state machines (tenure and leave quota), and the
//! composite verdict. The router and CSV importer are thin delivery shells
//! around it; nothing in this module holds state between calls.

pub mod calendar;
pub mod domain;
pub(crate) mod evaluation;
pub mod import;
pub mod intervals;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    EligibilityContext, LeaveInterval, LeaveQuotaResult, Regime, RequirementResult,
    RequirementStatus,
};
pub use evaluation::{
    EligibilityConfig, EligibilityEngine, EligibilityOutcome, MissingRequirement, TramiteVerdict,
};
pub use import::{LeaveCsvImporter, LeaveImportError};
pub use intervals::{classify_interval, valid_day_count, valid_range, IntervalStatus, IntervalView};
pub use router::{eligibility_router, EligibilityRequest, EligibilityResponse};
