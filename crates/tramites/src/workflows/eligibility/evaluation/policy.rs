use serde::{Deserialize, Serialize};

use super::super::domain::{LeaveQuotaResult, RequirementResult};

/// Final adjudication once both requirements have been evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TramiteVerdict {
    Incomplete,
    Approved,
    Rejected { missing: Vec<MissingRequirement> },
}

impl TramiteVerdict {
    pub const fn status_tag(&self) -> &'static str {
        match self {
            TramiteVerdict::Incomplete => "incomplete",
            TramiteVerdict::Approved => "approved",
            TramiteVerdict::Rejected { .. } => "rejected",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            TramiteVerdict::Incomplete => {
                "Captura todos los datos para determinar si el trámite es aprobado.".to_string()
            }
            TramiteVerdict::Approved => "Aprobado: ambos requisitos se cumplen.".to_string(),
            TramiteVerdict::Rejected { missing } => {
                let labels: Vec<String> = missing.iter().map(MissingRequirement::label).collect();
                format!("No aprobado: falta cumplir {}.", labels.join(" y "))
            }
        }
    }
}

/// Names the requirement(s) a rejected trámite still has to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingRequirement {
    Tenure { minimum_years: i32 },
    LeaveQuota,
}

impl MissingRequirement {
    pub fn label(&self) -> String {
        match self {
            MissingRequirement::Tenure { minimum_years } => {
                format!("{minimum_years} años de servicio")
            }
            MissingRequirement::LeaveQuota => "los días de licencia requeridos".to_string(),
        }
    }
}

/// Combine the two requirement results into the overall verdict.
///
/// No verdict is rendered until both requirements are ready; a favorable
/// judgment needs both to be valid, and a rejection names every requirement
/// that fell short.
pub(crate) fn decide_verdict(
    tenure: &RequirementResult,
    quota: &LeaveQuotaResult,
    minimum_years: i32,
) -> TramiteVerdict {
    if !tenure.ready || !quota.requirement.ready {
        return TramiteVerdict::Incomplete;
    }

    if tenure.valid && quota.requirement.valid {
        return TramiteVerdict::Approved;
    }

    let mut missing = Vec::new();
    if !tenure.valid {
        missing.push(MissingRequirement::Tenure { minimum_years });
    }
    if !quota.requirement.valid {
        missing.push(MissingRequirement::LeaveQuota);
    }

    TramiteVerdict::Rejected { missing }
}
