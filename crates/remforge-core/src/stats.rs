//! Summary and extended statistics over a record sequence.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::record::{Modality, REMRecord};

/// Headline numbers shown next to the charts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub total_experiences: usize,
    pub total_qualia: usize,
    pub total_anchors: usize,
    /// `None` when there are no records.
    pub avg_valence: Option<f64>,
}

impl Statistics {
    pub fn has_data(&self) -> bool {
        self.total_experiences > 0
    }
}

/// Compute the headline statistics. An empty slice yields zero counts and
/// no mean.
pub fn aggregate(records: &[REMRecord]) -> Statistics {
    let valences: Vec<f64> = records.iter().map(|r| r.sensorium.affective_valence).collect();
    Statistics {
        total_experiences: records.len(),
        total_qualia: records
            .iter()
            .map(|r| r.semantic_contamination.qualia_tokens.len())
            .sum(),
        total_anchors: records
            .iter()
            .map(|r| r.semantic_contamination.lexical_anchors.len())
            .sum(),
        avg_valence: mean(&valences),
    }
}

/// Mean, population std, min and max of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        Some(Self {
            mean,
            std: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignHistogram {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SignHistogram {
    pub fn of(values: &[f64]) -> Self {
        let mut h = Self::default();
        for &v in values {
            if v > POSITIVE_THRESHOLD {
                h.positive += 1;
            } else if v < NEGATIVE_THRESHOLD {
                h.negative += 1;
            } else {
                h.neutral += 1;
            }
        }
        h
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValenceStats {
    #[serde(flatten)]
    pub summary: Summary,
    #[serde(flatten)]
    pub signs: SignHistogram,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdvancedStats {
    pub valence: ValenceStats,
    /// Only modalities reported by at least one record. A record that omits
    /// a modality does not contribute to that modality's sample.
    pub modalities: BTreeMap<Modality, Summary>,
}

/// Extended statistics. `None` for an empty slice.
pub fn advanced_stats(records: &[REMRecord]) -> Option<AdvancedStats> {
    let valences: Vec<f64> = records.iter().map(|r| r.sensorium.affective_valence).collect();
    let summary = Summary::of(&valences)?;

    let mut samples: BTreeMap<Modality, Vec<f64>> = BTreeMap::new();
    for rem in records {
        for (&modality, &confidence) in &rem.sensorium.modality_confidence {
            samples.entry(modality).or_default().push(confidence);
        }
    }

    let modalities = samples
        .into_iter()
        .filter_map(|(m, values)| Summary::of(&values).map(|s| (m, s)))
        .collect();

    Some(AdvancedStats {
        valence: ValenceStats {
            summary,
            signs: SignHistogram::of(&valences),
        },
        modalities,
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
