//! Narrative report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConditionsRecord;

/// Free-text analysis of a conditions record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeReport {
    pub analysis: String,
    pub surf_data: ConditionsRecord,
    pub timestamp: DateTime<Utc>,
}

impl NarrativeReport {
    pub fn new(analysis: String, surf_data: ConditionsRecord) -> Self {
        Self {
            analysis,
            surf_data,
            timestamp: Utc::now(),
        }
    }
}
