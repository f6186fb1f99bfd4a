//! Surf quality scoring
//!
//! The score is the sum of one award per factor, capped to [0, 100]. Each
//! factor is an ordered list of rules; the first rule whose predicate
//! matches awards its points, and `otherwise` applies when none do.
//! Boundaries are inclusive.

use serde::Serialize;

use crate::models::ConditionsRecord;

pub const MAX_SCORE: f64 = 100.0;
pub const MIN_SCORE: f64 = 0.0;

/// Predicate over a conditions record
pub type Predicate = fn(&ConditionsRecord) -> bool;

/// A single scoring rule
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    pub predicate: Predicate,
    pub points: f64,
}

/// Scored factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    WaveHeight,
    WavePeriod,
    WindSpeed,
    SwellConsistency,
}

/// Ordered rules for one factor
#[derive(Debug, Clone, Copy)]
pub struct FactorRule {
    pub factor: Factor,
    pub rules: &'static [Rule],
    pub otherwise: f64,
}

impl FactorRule {
    /// Points awarded for this factor
    pub fn evaluate(&self, record: &ConditionsRecord) -> f64 {
        self.rules
            .iter()
            .find(|rule| (rule.predicate)(record))
            .map(|rule| rule.points)
            .unwrap_or(self.otherwise)
    }
}

/// Points awarded to a single factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub points: f64,
}

fn between(value: f64, low: f64, high: f64) -> bool {
    low <= value && value <= high
}

fn wave_height_optimal(r: &ConditionsRecord) -> bool {
    between(r.wave_height, 3.0, 8.0)
}

fn wave_height_rideable(r: &ConditionsRecord) -> bool {
    between(r.wave_height, 2.0, 10.0)
}

fn wave_period_optimal(r: &ConditionsRecord) -> bool {
    between(r.wave_period, 10.0, 16.0)
}

fn wave_period_fair(r: &ConditionsRecord) -> bool {
    between(r.wave_period, 8.0, 18.0)
}

fn wind_light(r: &ConditionsRecord) -> bool {
    r.wind_speed <= 10.0
}

fn wind_moderate(r: &ConditionsRecord) -> bool {
    r.wind_speed <= 15.0
}

fn swell_consistent(r: &ConditionsRecord) -> bool {
    r.swell_height >= 3.0 && r.swell_period >= 10.0
}

/// The scoring table
pub static QUALITY_RULES: [FactorRule; 4] = [
    FactorRule {
        factor: Factor::WaveHeight,
        rules: &[
            Rule {
                label: "3-8 ft",
                predicate: wave_height_optimal,
                points: 30.0,
            },
            Rule {
                label: "2-10 ft",
                predicate: wave_height_rideable,
                points: 20.0,
            },
        ],
        otherwise: 10.0,
    },
    FactorRule {
        factor: Factor::WavePeriod,
        rules: &[
            Rule {
                label: "10-16 s",
                predicate: wave_period_optimal,
                points: 25.0,
            },
            Rule {
                label: "8-18 s",
                predicate: wave_period_fair,
                points: 15.0,
            },
        ],
        otherwise: 5.0,
    },
    FactorRule {
        factor: Factor::WindSpeed,
        rules: &[
            Rule {
                label: "<= 10 mph",
                predicate: wind_light,
                points: 25.0,
            },
            Rule {
                label: "<= 15 mph",
                predicate: wind_moderate,
                points: 15.0,
            },
        ],
        otherwise: 5.0,
    },
    FactorRule {
        factor: Factor::SwellConsistency,
        rules: &[Rule {
            label: ">= 3 ft and >= 10 s",
            predicate: swell_consistent,
            points: 20.0,
        }],
        otherwise: 10.0,
    },
];

/// Per-factor points for a record
pub fn score_breakdown(record: &ConditionsRecord) -> Vec<FactorScore> {
    QUALITY_RULES
        .iter()
        .map(|rule| FactorScore {
            factor: rule.factor,
            points: rule.evaluate(record),
        })
        .collect()
}

/// Quality score in [0, 100]
pub fn score(record: &ConditionsRecord) -> f64 {
    score_with(&QUALITY_RULES, record)
}

/// Score against an arbitrary rule table
pub fn score_with(rules: &[FactorRule], record: &ConditionsRecord) -> f64 {
    let total: f64 = rules.iter().map(|rule| rule.evaluate(record)).sum();
    total.clamp(MIN_SCORE, MAX_SCORE)
}
