//! Series handed to the host for its four charts. The host owns rendering,
//! axes and colors; these functions only shape the data.

use serde::Serialize;

use crate::constants::{HIGH_VALENCE, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::record::{Modality, REMRecord};

/// Mean confidence per modality across all records, treating a missing
/// modality as 0. Modalities with a zero mean are dropped; the rest keep
/// declaration order.
pub fn modality_bars(records: &[REMRecord]) -> Vec<(Modality, f64)> {
    if records.is_empty() {
        return Vec::new();
    }
    let n = records.len() as f64;
    Modality::ALL
        .iter()
        .map(|&m| {
            let sum: f64 = records
                .iter()
                .map(|r| r.sensorium.modality_confidence.get(&m).copied().unwrap_or(0.0))
                .sum();
            (m, sum / n)
        })
        .filter(|&(_, avg)| avg > 0.0)
        .collect()
}

/// (position, valence) points in sequence order.
pub fn valence_timeline(records: &[REMRecord]) -> Vec<(usize, f64)> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.sensorium.affective_valence))
        .collect()
}

/// One bar of the valence distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width bins over [-1, 1]. Values beyond the range (possible for
/// categories whose valence is not clamped) land in the edge bins, so the
/// counts always sum to the record count.
pub fn valence_histogram(records: &[REMRecord], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let width = 2.0 / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: -1.0 + i as f64 * width,
            upper: -1.0 + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for r in records {
        let v = r.sensorium.affective_valence;
        let idx = ((v + 1.0) / width).floor();
        let idx = if idx.is_nan() || idx < 0.0 {
            0
        } else {
            (idx as usize).min(bins - 1)
        };
        out[idx].count += 1;
    }
    out
}

/// (spatial horizon, count) in order of first appearance.
pub fn spatial_distribution(records: &[REMRecord]) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = Vec::new();
    for r in records {
        let horizon = &r.sensorium.spatial_horizon;
        match out.iter_mut().find(|(h, _)| h == horizon) {
            Some((_, count)) => *count += 1,
            None => out.push((horizon.clone(), 1)),
        }
    }
    out
}

/// Coarse valence class used to color points and badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValenceBand {
    HighPositive,
    MildPositive,
    Neutral,
    MildNegative,
    HighNegative,
}

impl ValenceBand {
    pub fn of(valence: f64) -> Self {
        if valence > HIGH_VALENCE {
            ValenceBand::HighPositive
        } else if valence > POSITIVE_THRESHOLD {
            ValenceBand::MildPositive
        } else if valence > NEGATIVE_THRESHOLD {
            ValenceBand::Neutral
        } else if valence > -HIGH_VALENCE {
            ValenceBand::MildNegative
        } else {
            ValenceBand::HighNegative
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ValenceBand::HighPositive => "#7ED321",
            ValenceBand::MildPositive => "#F5A623",
            ValenceBand::Neutral => "#8B7355",
            ValenceBand::MildNegative => "#BD10E0",
            ValenceBand::HighNegative => "#D0021B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FileDescriptor, RecordCategory};
    use crate::synth::synthesize_at;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn record(category: RecordCategory, valence: f64) -> REMRecord {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut rec = synthesize_at(&FileDescriptor::new("x", 1), category, 0, 0, &mut rng);
        rec.sensorium.affective_valence = valence;
        rec
    }

    #[test]
    fn test_modality_bars_pair_names_with_means() {
        let records = vec![
            record(RecordCategory::Text, 0.0),
            record(RecordCategory::Image, 0.0),
        ];
        let bars = modality_bars(&records);
        let names: Vec<_> = bars.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            names,
            vec![
                Modality::Visual,
                Modality::Auditory,
                Modality::Haptic,
                Modality::Affective,
                Modality::Proprioceptive,
                Modality::Digital,
            ]
        );
        assert_relative_eq!(bars[0].1, (0.2 + 0.95) / 2.0);
        assert_relative_eq!(bars[5].1, (0.9 + 0.8) / 2.0);
    }

    #[test]
    fn test_modality_bars_absent_counts_as_zero() {
        let mut a = record(RecordCategory::Text, 0.0);
        let b = record(RecordCategory::Text, 0.0);
        a.sensorium.modality_confidence.remove(&Modality::Haptic);
        let bars = modality_bars(&[a, b]);
        let haptic = bars.iter().find(|(m, _)| *m == Modality::Haptic).unwrap();
        assert_relative_eq!(haptic.1, 0.025);
    }

    #[test]
    fn test_modality_bars_empty() {
        assert!(modality_bars(&[]).is_empty());
    }

    #[test]
    fn test_timeline_keeps_order() {
        let records = vec![
            record(RecordCategory::Text, 0.3),
            record(RecordCategory::Text, -0.4),
        ];
        assert_eq!(valence_timeline(&records), vec![(0, 0.3), (1, -0.4)]);
    }

    #[test]
    fn test_histogram_edges() {
        let records = vec![
            record(RecordCategory::Audio, 1.08),
            record(RecordCategory::Audio, -1.0),
            record(RecordCategory::Audio, 1.0),
            record(RecordCategory::Audio, 0.0),
        ];
        let bins = valence_histogram(&records, 15);
        assert_eq!(bins.len(), 15);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[14].count, 2);
        assert_eq!(bins[7].count, 1);
        assert_relative_eq!(bins[0].lower, -1.0);
        assert_relative_eq!(bins[14].upper, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spatial_first_appearance_order() {
        let records = vec![
            record(RecordCategory::Image, 0.0),
            record(RecordCategory::Text, 0.0),
            record(RecordCategory::Image, 0.0),
        ];
        assert_eq!(
            spatial_distribution(&records),
            vec![
                ("peripersonal_space".to_string(), 2),
                ("imaginal_space".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_valence_bands() {
        assert_eq!(ValenceBand::of(0.8), ValenceBand::HighPositive);
        assert_eq!(ValenceBand::of(0.5), ValenceBand::MildPositive);
        assert_eq!(ValenceBand::of(0.1), ValenceBand::Neutral);
        assert_eq!(ValenceBand::of(-0.1), ValenceBand::MildNegative);
        assert_eq!(ValenceBand::of(-0.5), ValenceBand::HighNegative);
        assert_eq!(ValenceBand::of(0.0).color(), "#8B7355");
    }

    proptest! {
        #[test]
        fn prop_histogram_counts_sum_to_n(values in prop::collection::vec(-2.0f64..2.0, 0..40)) {
            let records: Vec<_> = values
                .iter()
                .map(|&v| record(RecordCategory::Generic, v))
                .collect();
            let total: usize = valence_histogram(&records, 15).iter().map(|b| b.count).sum();
            prop_assert_eq!(total, values.len());
        }
    }
}
