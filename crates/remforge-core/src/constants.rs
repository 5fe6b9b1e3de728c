/// Valence above this counts as positive in the sign histogram.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Valence below this counts as negative in the sign histogram.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Valence above this is "high" positive (and below its negation, "high" negative)
/// for chart coloring.
pub const HIGH_VALENCE: f64 = 0.5;

/// Maximum narrative length (in characters) kept in a CSV row.
pub const CSV_NARRATIVE_LIMIT: usize = 100;

/// Bin count for the valence distribution chart.
pub const VALENCE_HISTOGRAM_BINS: usize = 15;

/// Pacing: fixed delay applied to every batch.
pub const BASE_DELAY_MS: u64 = 2000;

/// Pacing: extra delay per size unit.
pub const PER_UNIT_MS: u64 = 1000;

/// Pacing: size of one unit (10 MiB).
pub const SIZE_UNIT_BYTES: u64 = 10 * 1024 * 1024;

/// Pacing: cap on the number of size units counted.
pub const MAX_UNITS: f64 = 3.0;
