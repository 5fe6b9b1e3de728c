//! REMForge core: synthetic experience-record (REM) model.
//!
//! Files are classified by extension, each becomes one REM record sampled
//! from a static per-category profile, and the resulting sequence feeds
//! statistics, chart series and JSON/CSV/HTML exports.
//!
//! Zero I/O. The random source and the clock are supplied by the caller.

pub mod charts;
pub mod classify;
pub mod constants;
pub mod error;
pub mod export;
pub mod format;
pub mod profile;
pub mod record;
pub mod sequence;
pub mod session;
pub mod stats;
pub mod synth;
pub mod time;

pub use charts::{
    HistogramBin, ValenceBand, modality_bars, spatial_distribution, valence_histogram,
    valence_timeline,
};
pub use classify::classify;
pub use constants::{CSV_NARRATIVE_LIMIT, VALENCE_HISTOGRAM_BINS};
pub use error::{Result, SessionError};
pub use export::{CSV_HEADER, ExportFormat, from_json, to_csv, to_json, to_report};
pub use format::format_file_size;
pub use profile::{CategoryProfile, profile};
pub use record::{
    FileDescriptor, FileInfo, IntentionalAct, IntentionalMode, Modality, QualiaToken, REMRecord,
    RecordCategory, SemanticContamination, SensoriumProfile,
};
pub use sequence::{REMSequence, RunMetadata, generate_sequence, generate_sequence_at};
pub use session::{Artifact, PacingConfig, Session};
pub use stats::{AdvancedStats, SignHistogram, Statistics, Summary, ValenceStats, advanced_stats, aggregate};
pub use synth::{synthesize, synthesize_at};
