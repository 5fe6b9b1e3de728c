use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of content categories a file can be classified into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    Text,
    Image,
    Audio,
    Video,
    /// Anything without a recognized extension. Exported as `unknown`.
    #[serde(rename = "unknown", alias = "generic")]
    Generic,
}

impl RecordCategory {
    pub const ALL: [RecordCategory; 5] = [
        RecordCategory::Text,
        RecordCategory::Image,
        RecordCategory::Audio,
        RecordCategory::Video,
        RecordCategory::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Text => "text",
            RecordCategory::Image => "image",
            RecordCategory::Audio => "audio",
            RecordCategory::Video => "video",
            RecordCategory::Generic => "unknown",
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sense channels a record can report confidence for.
///
/// Declaration order is significant: it is the iteration order of every
/// confidence map and the tie-break order for the dominant modality.
/// `Olfactory` and `Gustatory` are part of the schema but no category
/// profile populates them, so they are always absent from synthesized records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Visual,
    Auditory,
    Haptic,
    Affective,
    Proprioceptive,
    Olfactory,
    Gustatory,
    Digital,
}

impl Modality {
    pub const ALL: [Modality; 8] = [
        Modality::Visual,
        Modality::Auditory,
        Modality::Haptic,
        Modality::Affective,
        Modality::Proprioceptive,
        Modality::Olfactory,
        Modality::Gustatory,
        Modality::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Visual => "visual",
            Modality::Auditory => "auditory",
            Modality::Haptic => "haptic",
            Modality::Affective => "affective",
            Modality::Proprioceptive => "proprioceptive",
            Modality::Olfactory => "olfactory",
            Modality::Gustatory => "gustatory",
            Modality::Digital => "digital",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentionalMode {
    Reflection,
    Perception,
    Contemplation,
}

impl IntentionalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentionalMode::Reflection => "reflection",
            IntentionalMode::Perception => "perception",
            IntentionalMode::Contemplation => "contemplation",
        }
    }
}

/// A file handed in by the host. Only the name and size are ever used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Provenance snapshot of the file that triggered a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub category: RecordCategory,
    pub size: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentionalAct {
    pub mode: IntentionalMode,
    pub directedness: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensoriumProfile {
    pub modality_confidence: BTreeMap<Modality, f64>,
    /// Not clamped: tails of some categories exceed ±1.
    pub affective_valence: f64,
    pub spatial_horizon: String,
}

impl SensoriumProfile {
    /// Modality with the highest confidence. Ties go to the modality that
    /// comes first in declaration order. `None` for an empty map.
    pub fn dominant_modality(&self) -> Option<Modality> {
        let mut best: Option<(Modality, f64)> = None;
        for (&modality, &confidence) in &self.modality_confidence {
            match best {
                Some((_, top)) if confidence <= top => {}
                _ => best = Some((modality, confidence)),
            }
        }
        best.map(|(m, _)| m)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualiaToken {
    pub token: String,
    pub is_sensorial: bool,
    pub is_affective: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticContamination {
    pub lexical_anchors: Vec<String>,
    pub contamination_strength: f64,
    pub qualia_tokens: Vec<QualiaToken>,
}

/// One synthesized experience unit attached to an input file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct REMRecord {
    pub rem_id: String,
    pub timestamp: String,
    pub file_info: FileInfo,
    pub narrative_stream: String,
    pub intentional_act: IntentionalAct,
    pub sensorium: SensoriumProfile,
    pub semantic_contamination: SemanticContamination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensorium(pairs: &[(Modality, f64)]) -> SensoriumProfile {
        SensoriumProfile {
            modality_confidence: pairs.iter().copied().collect(),
            affective_valence: 0.0,
            spatial_horizon: "digital_space".to_string(),
        }
    }

    #[test]
    fn test_dominant_modality_picks_max() {
        let s = sensorium(&[
            (Modality::Visual, 0.2),
            (Modality::Affective, 0.7),
            (Modality::Digital, 0.9),
        ]);
        assert_eq!(s.dominant_modality(), Some(Modality::Digital));
    }

    #[test]
    fn test_dominant_modality_tie_goes_to_declaration_order() {
        let s = sensorium(&[(Modality::Digital, 0.5), (Modality::Haptic, 0.5)]);
        assert_eq!(s.dominant_modality(), Some(Modality::Haptic));
    }

    #[test]
    fn test_dominant_modality_empty() {
        assert_eq!(sensorium(&[]).dominant_modality(), None);
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&RecordCategory::Generic).unwrap();
        assert_eq!(json, "\"unknown\"");
        let parsed: RecordCategory = serde_json::from_str("\"generic\"").unwrap();
        assert_eq!(parsed, RecordCategory::Generic);
        for category in RecordCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_modality_map_keys_serialize_in_declaration_order() {
        let s = sensorium(&[(Modality::Digital, 0.9), (Modality::Visual, 0.2)]);
        let json = serde_json::to_string(&s.modality_confidence).unwrap();
        assert_eq!(json, r#"{"visual":0.2,"digital":0.9}"#);
    }
}
