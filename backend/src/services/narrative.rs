//! Narrative reports from the text-generation service

use shared::{ConditionsRecord, NarrativeReport};

use crate::error::AppResult;
use crate::external::narrative::{NarrativeClient, NarrativeError};

pub const SYSTEM_PROMPT: &str = "You are a professional surf analyst and ASCII artist. \
Provide detailed, accurate surf analysis and create proportional ASCII wave \
visualizations.";

/// Style reference for the generated wave illustration
pub const WAVE_TEMPLATE: &str = r#"
         _.====.._
      ,:._       ~-_
          `\        ~-_
            | _  _  |  `.
          ,/ /_)/ | |    ~-_
 -..__..-''  \_ \_\ `_      ~~--..__"#;

/// Prefix of the analysis text when the service call fails
pub const ERROR_PREFIX: &str = "Error analyzing conditions:";

/// Format the user prompt for a conditions record
pub fn build_prompt(record: &ConditionsRecord) -> String {
    format!(
        "You are a professional surf analyst and ASCII artist. \
Analyze these surf conditions and create a detailed report:

Location: {location}
Wave Height: {wave_height:?} feet
Wave Period: {wave_period:?} seconds
Wave Direction: {wave_direction}
Wind Speed: {wind_speed:?} mph
Wind Direction: {wind_direction}
Temperature: {temperature:?}°C
Swell Height: {swell_height:?} feet
Swell Period: {swell_period:?} seconds
Swell Direction: {swell_direction}
Tide: {tide_height:?} feet

Please provide the analysis in this EXACT format:

**WAVE VISUALIZATION:**
[Create an ASCII wave using this style:
{template}]

**SURF ANALYSIS:**
- Wave Quality: [analysis]
- Difficulty Level: [analysis]
- Conditions: [analysis]
- Key Insights: [recommendations]
- Safety: [considerations]
- Best Time: [when to surf]
",
        location = record.location_name,
        wave_height = record.wave_height,
        wave_period = record.wave_period,
        wave_direction = record.wave_direction,
        wind_speed = record.wind_speed,
        wind_direction = record.wind_direction,
        temperature = record.temperature,
        swell_height = record.swell_height,
        swell_period = record.swell_period,
        swell_direction = record.swell_direction,
        tide_height = record.tide_height,
        template = WAVE_TEMPLATE,
    )
}

/// Narrative report service
#[derive(Clone)]
pub struct NarrativeService {
    client: NarrativeClient,
}

impl NarrativeService {
    pub fn new(client: NarrativeClient) -> Self {
        Self { client }
    }

    async fn generate(&self, record: &ConditionsRecord) -> Result<String, NarrativeError> {
        self.client
            .complete(SYSTEM_PROMPT, &build_prompt(record))
            .await
    }

    /// Report that propagates service failures
    pub async fn try_report(&self, record: ConditionsRecord) -> AppResult<NarrativeReport> {
        let analysis = self.generate(&record).await?;
        Ok(NarrativeReport::new(analysis, record))
    }

    /// Report that never fails
    ///
    /// A service failure becomes the analysis text.
    pub async fn report(&self, record: ConditionsRecord) -> NarrativeReport {
        match self.generate(&record).await {
            Ok(analysis) => NarrativeReport::new(analysis, record),
            Err(err) => {
                tracing::warn!(
                    location = %record.location_name,
                    error = %err,
                    "Narrative service error"
                );
                NarrativeReport::new(format!("{} {}", ERROR_PREFIX, err), record)
            }
        }
    }
}
