//! Caller-owned session holding the current sequence.
//!
//! Each batch replaces the current sequence wholesale. A failed batch,
//! import or export leaves it untouched. `process_files` borrows the session
//! mutably, so batches are serialized by construction.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{BASE_DELAY_MS, MAX_UNITS, PER_UNIT_MS, SIZE_UNIT_BYTES};
use crate::error::{Result, SessionError};
use crate::export::{ExportFormat, from_json};
use crate::record::FileDescriptor;
use crate::sequence::{REMSequence, generate_sequence_at, total_size};
use crate::stats::{AdvancedStats, Statistics, advanced_stats, aggregate};
use crate::time::now_unix_millis;

/// Pacing for host feedback. Has no effect on the data produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub enabled: bool,
    pub base_delay_ms: u64,
    pub per_unit_ms: u64,
    pub size_unit_bytes: u64,
    pub max_units: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_delay_ms: BASE_DELAY_MS,
            per_unit_ms: PER_UNIT_MS,
            size_unit_bytes: SIZE_UNIT_BYTES,
            max_units: MAX_UNITS,
        }
    }
}

impl PacingConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// `base + min(total / unit, max_units) * per_unit`, or zero when disabled.
    pub fn delay_for(&self, total_bytes: u64) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let units = if self.size_unit_bytes == 0 {
            self.max_units
        } else {
            (total_bytes as f64 / self.size_unit_bytes as f64).min(self.max_units)
        };
        let extra_ms = (units.max(0.0) * self.per_unit_ms as f64).round() as u64;
        Duration::from_millis(self.base_delay_ms.saturating_add(extra_ms))
    }
}

/// A rendered export ready for the host to save or offer for download.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<REMSequence>,
    pacing: PacingConfig,
}

impl Session {
    pub fn new(pacing: PacingConfig) -> Self {
        Self {
            current: None,
            pacing,
        }
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    /// How long the host should pace feedback for this batch.
    pub fn pacing_delay(&self, files: &[FileDescriptor]) -> Duration {
        self.pacing.delay_for(total_size(files))
    }

    pub fn current(&self) -> Option<&REMSequence> {
        self.current.as_ref()
    }

    /// Synthesize a batch and make it the current sequence.
    pub fn process_files(
        &mut self,
        files: &[FileDescriptor],
        rng: &mut impl Rng,
    ) -> Result<&REMSequence> {
        self.process_files_at(files, now_unix_millis(), rng)
    }

    pub fn process_files_at(
        &mut self,
        files: &[FileDescriptor],
        unix_millis: u64,
        rng: &mut impl Rng,
    ) -> Result<&REMSequence> {
        if files.is_empty() {
            return Err(SessionError::EmptyBatch);
        }
        let seq = generate_sequence_at(files, unix_millis, rng);
        Ok(&*self.current.insert(seq))
    }

    /// Replace the current sequence with a validated JSON export.
    pub fn import_json(&mut self, json: &str) -> Result<&REMSequence> {
        let seq = from_json(json)?;
        seq.validate()?;
        Ok(&*self.current.insert(seq))
    }

    pub fn statistics(&self) -> Result<Statistics> {
        self.current
            .as_ref()
            .map(|seq| aggregate(&seq.sequence))
            .ok_or(SessionError::NoData)
    }

    pub fn advanced_statistics(&self) -> Result<AdvancedStats> {
        self.current
            .as_ref()
            .and_then(|seq| advanced_stats(&seq.sequence))
            .ok_or(SessionError::NoData)
    }

    /// Render the current sequence. `format` is a host-supplied name such as
    /// `"json"`, `"csv"` or `"report"`. An empty session reports `NoData`
    /// whatever the format name.
    pub fn export(&self, format: &str) -> Result<Artifact> {
        let seq = self.exportable()?;
        let format: ExportFormat = format.parse()?;
        Self::artifact(seq, format, now_unix_millis())
    }

    pub fn export_as(&self, format: ExportFormat, unix_millis: u64) -> Result<Artifact> {
        Self::artifact(self.exportable()?, format, unix_millis)
    }

    fn exportable(&self) -> Result<&REMSequence> {
        self.current
            .as_ref()
            .filter(|seq| !seq.is_empty())
            .ok_or(SessionError::NoData)
    }

    fn artifact(seq: &REMSequence, format: ExportFormat, unix_millis: u64) -> Result<Artifact> {
        Ok(Artifact {
            format,
            file_name: format.file_name(unix_millis),
            mime_type: format.mime_type(),
            content: format.render(seq)?,
        })
    }
}
