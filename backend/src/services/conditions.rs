//! Conditions service: live provider data with synthetic fallback

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{synthesize, Conditions, ConditionsRecord, Location, LocationRegistry};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::AppResult;
use crate::external::marine::{MarineClient, MarineError};

/// Random source for synthetic conditions
#[derive(Clone)]
pub enum RandomSource {
    /// Fresh thread-local entropy on every call
    Entropy,
    /// A single seeded generator shared by all callers
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
            None => RandomSource::Entropy,
        }
    }

    /// Draw a synthetic record for a location
    pub fn synthesize(&self, location: &Location) -> ConditionsRecord {
        match self {
            RandomSource::Entropy => synthesize(location, &mut rand::thread_rng()),
            RandomSource::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                synthesize(location, &mut *rng)
            }
        }
    }
}

/// Conditions service
#[derive(Clone)]
pub struct ConditionsService {
    registry: Arc<LocationRegistry>,
    marine: MarineClient,
    random: RandomSource,
}

impl ConditionsService {
    /// Create a new ConditionsService instance
    pub fn new(
        registry: Arc<LocationRegistry>,
        marine: MarineClient,
        random: RandomSource,
    ) -> Self {
        Self {
            registry,
            marine,
            random,
        }
    }

    /// Current conditions for a registered location
    ///
    /// Unknown ids are an error. Any provider failure is logged and replaced
    /// by synthetic data; the returned `source` says which one was used.
    pub async fn fetch_conditions(&self, location_id: &str) -> AppResult<Conditions> {
        let location = self.registry.get_location(location_id)?;

        match self.fetch_from_provider(location).await {
            Ok(record) => Ok(Conditions::live(record)),
            Err(err) => {
                tracing::warn!(
                    location = %location.id,
                    error = %err,
                    "Marine API error, falling back to synthetic conditions"
                );
                Ok(Conditions::synthetic(self.random.synthesize(location)))
            }
        }
    }

    /// Current conditions straight from the provider, without fallback
    pub async fn fetch_live_conditions(&self, location_id: &str) -> AppResult<ConditionsRecord> {
        let location = self.registry.get_location(location_id)?;
        Ok(self.fetch_from_provider(location).await?)
    }

    async fn fetch_from_provider(
        &self,
        location: &Location,
    ) -> Result<ConditionsRecord, MarineError> {
        let now = Utc::now();
        let reading = self.marine.fetch_current(location, now.date_naive()).await?;
        Ok(reading.into_record(&location.name, now))
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }
}
