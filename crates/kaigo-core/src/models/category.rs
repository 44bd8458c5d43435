use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::care_plan::ServiceItem;

/// Closed set of disease/condition categories used to group exemplars.
///
/// `AdlGeneral` is the catch-all: it is considered relevant for every
/// assessment regardless of keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryId {
    Dementia,
    Stroke,
    Orthopedic,
    Cardiac,
    Disuse,
    AdlGeneral,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Dementia => "dementia",
            CategoryId::Stroke => "stroke",
            CategoryId::Orthopedic => "orthopedic",
            CategoryId::Cardiac => "cardiac",
            CategoryId::Disuse => "disuse",
            CategoryId::AdlGeneral => "adl_general",
        }
    }
}

/// A pre-authored reference need/goal/service bundle used to ground
/// generation. Part of the static corpus; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarePlanExample {
    pub needs: String,
    pub long_term_goal: String,
    pub short_term_goals: Vec<String>,
    pub services: Vec<ServiceItem>,
}

/// A keyword-triggered grouping of exemplars for one clinical/functional
/// condition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiseaseCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub examples: Vec<CarePlanExample>,
}
