//! Rankings service

use shared::{sort_by_quality, RankingEntry};

use super::conditions::ConditionsService;
use crate::error::AppResult;

/// Ranks every registered location by quality score
#[derive(Clone)]
pub struct RankingsService {
    conditions: ConditionsService,
}

impl RankingsService {
    pub fn new(conditions: ConditionsService) -> Self {
        Self { conditions }
    }

    /// Rank all registered locations, best first
    pub async fn build_rankings(&self) -> Vec<RankingEntry> {
        let location_ids = self.conditions.registry().list_locations();
        self.rank_locations(&location_ids).await
    }

    /// Fetch, score and order the given locations, best first
    ///
    /// A location that fails is logged and left out rather than failing the
    /// whole ranking.
    pub async fn rank_locations(&self, location_ids: &[&str]) -> Vec<RankingEntry> {
        let mut entries = Vec::with_capacity(location_ids.len());

        for location_id in location_ids {
            match self.rank_one(location_id).await {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::warn!(
                        location = %location_id,
                        error = %err,
                        "Skipping location in rankings"
                    );
                }
            }
        }

        sort_by_quality(&mut entries);
        entries
    }

    async fn rank_one(&self, location_id: &str) -> AppResult<RankingEntry> {
        let location = self.conditions.registry().get_location(location_id)?;
        let conditions = self.conditions.fetch_conditions(location_id).await?;
        Ok(RankingEntry::scored(location, conditions.record))
    }
}
