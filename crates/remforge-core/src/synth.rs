use rand::Rng;

use crate::profile::profile;
use crate::record::{
    FileDescriptor, FileInfo, IntentionalAct, QualiaToken, REMRecord, RecordCategory,
    SemanticContamination, SensoriumProfile,
};
use crate::time::{now_unix_millis, unix_millis_to_iso8601};

/// Synthesize one record for `file`, stamped with the current wall-clock time.
pub fn synthesize(
    file: &FileDescriptor,
    category: RecordCategory,
    index: usize,
    rng: &mut impl Rng,
) -> REMRecord {
    synthesize_at(file, category, index, now_unix_millis(), rng)
}

/// Synthesize one record with an explicit creation instant (Unix millis).
///
/// The id is `rem_<millis>_<index>`, unique within a batch as long as each
/// file gets its own index. Exactly two draws are taken from `rng`: the
/// narrative pick, then the valence sample.
pub fn synthesize_at(
    file: &FileDescriptor,
    category: RecordCategory,
    index: usize,
    unix_millis: u64,
    rng: &mut impl Rng,
) -> REMRecord {
    let p = profile(category);

    let narrative = p.narratives[rng.random_range(0..p.narratives.len())];
    let valence = (rng.random::<f64>() - p.valence_bias) * p.valence_scale;

    REMRecord {
        rem_id: format!("rem_{unix_millis}_{index}"),
        timestamp: unix_millis_to_iso8601(unix_millis),
        file_info: FileInfo {
            name: file.name.clone(),
            category,
            size: file.size,
        },
        narrative_stream: narrative.to_string(),
        intentional_act: IntentionalAct {
            mode: p.mode,
            directedness: p.directedness.to_string(),
        },
        sensorium: SensoriumProfile {
            modality_confidence: p.confidence.iter().copied().collect(),
            affective_valence: valence,
            spatial_horizon: p.spatial_horizon.to_string(),
        },
        semantic_contamination: SemanticContamination {
            lexical_anchors: p.lexical_anchors.iter().map(|s| s.to_string()).collect(),
            contamination_strength: p.contamination_strength,
            qualia_tokens: p
                .qualia
                .iter()
                .map(|&(token, is_sensorial, is_affective)| QualiaToken {
                    token: token.to_string(),
                    is_sensorial,
                    is_affective,
                })
                .collect(),
        },
    }
}
