//! Rankings models

use serde::{Deserialize, Serialize};

use super::{ConditionsRecord, Location};
use crate::scoring::score;

/// One row of the rankings table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingEntry {
    pub location_id: String,
    pub location_name: String,
    pub wave_height: f64,
    pub quality_score: f64,
    pub surf_data: ConditionsRecord,
}

impl RankingEntry {
    /// Score a record and wrap it for the given location
    pub fn scored(location: &Location, surf_data: ConditionsRecord) -> Self {
        Self {
            location_id: location.id.clone(),
            location_name: surf_data.location_name.clone(),
            wave_height: surf_data.wave_height,
            quality_score: score(&surf_data),
            surf_data,
        }
    }
}

/// Order entries by descending quality score
///
/// The sort is stable, so equal scores keep their original order.
pub fn sort_by_quality(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| b.quality_score.total_cmp(&a.quality_score));
}
