use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::{Result, SessionError};
use crate::record::{FileDescriptor, REMRecord};
use crate::synth::synthesize_at;
use crate::time::{now_unix_millis, unix_millis_to_iso8601};

/// Run-level metadata attached to a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    #[serde(rename = "totalFiles")]
    pub total_files: usize,
    #[serde(rename = "processedAt")]
    pub processed_at: String,
    #[serde(rename = "totalSize")]
    pub total_size: u64,
}

/// Records in file-selection order plus run metadata.
///
/// Order is significant: the temporal chart, CSV rows and report listing
/// all follow it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct REMSequence {
    pub sequence: Vec<REMRecord>,
    pub metadata: RunMetadata,
}

impl REMSequence {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &REMRecord> {
        self.sequence.iter()
    }

    /// Structural checks for data that did not come from the synthesizer,
    /// e.g. an imported JSON export.
    pub fn validate(&self) -> Result<()> {
        if self.sequence.is_empty() {
            return Err(SessionError::Invalid("sequence is empty".to_string()));
        }
        if self.metadata.total_files != self.sequence.len() {
            return Err(SessionError::Invalid(format!(
                "totalFiles is {} but sequence has {} records",
                self.metadata.total_files,
                self.sequence.len()
            )));
        }
        for (i, rem) in self.sequence.iter().enumerate() {
            if rem.rem_id.is_empty() {
                return Err(SessionError::Invalid(format!("record {i}: missing rem_id")));
            }
            if rem.timestamp.is_empty() {
                return Err(SessionError::Invalid(format!("record {i}: missing timestamp")));
            }
            if rem.narrative_stream.is_empty() {
                return Err(SessionError::Invalid(format!(
                    "record {i}: missing narrative_stream"
                )));
            }
            if rem.semantic_contamination.qualia_tokens.is_empty() {
                return Err(SessionError::Invalid(format!("record {i}: no qualia tokens")));
            }
            if let Some((m, c)) = rem
                .sensorium
                .modality_confidence
                .iter()
                .find(|(_, c)| !(0.0..=1.0).contains(*c))
            {
                return Err(SessionError::Invalid(format!(
                    "record {i}: {m} confidence {c} outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Classify and synthesize every file, stamped with the current time.
pub fn generate_sequence(files: &[FileDescriptor], rng: &mut impl Rng) -> REMSequence {
    generate_sequence_at(files, now_unix_millis(), rng)
}

/// Classify and synthesize every file with an explicit batch instant.
/// Record `i` is synthesized with index `i`, in input order.
pub fn generate_sequence_at(
    files: &[FileDescriptor],
    unix_millis: u64,
    rng: &mut impl Rng,
) -> REMSequence {
    let sequence: Vec<REMRecord> = files
        .iter()
        .enumerate()
        .map(|(i, file)| synthesize_at(file, classify(&file.name), i, unix_millis, rng))
        .collect();

    REMSequence {
        metadata: RunMetadata {
            total_files: sequence.len(),
            processed_at: unix_millis_to_iso8601(unix_millis),
            total_size: total_size(files),
        },
        sequence,
    }
}

/// Sum of file sizes in bytes.
pub fn total_size(files: &[FileDescriptor]) -> u64 {
    files.iter().map(|f| f.size).sum()
}
