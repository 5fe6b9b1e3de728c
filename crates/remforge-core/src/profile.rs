//! Static per-category synthesis profiles.
//!
//! Each category's confidence vector, valence parameters and literal pools
//! form its signature. The values are constants and must not drift.

use crate::record::{IntentionalMode, Modality, RecordCategory};

/// Everything the synthesizer needs to build a record for one category.
#[derive(Debug)]
pub struct CategoryProfile {
    pub category: RecordCategory,
    pub narratives: &'static [&'static str],
    pub mode: IntentionalMode,
    pub directedness: &'static str,
    pub confidence: &'static [(Modality, f64)],
    /// Valence is drawn as `(uniform[0,1) - bias) * scale`.
    pub valence_bias: f64,
    pub valence_scale: f64,
    pub spatial_horizon: &'static str,
    pub lexical_anchors: &'static [&'static str],
    pub contamination_strength: f64,
    /// (token, is_sensorial, is_affective)
    pub qualia: &'static [(&'static str, bool, bool)],
}

impl CategoryProfile {
    /// Inclusive range of valences this profile can produce.
    pub fn valence_range(&self) -> (f64, f64) {
        (
            -self.valence_bias * self.valence_scale,
            (1.0 - self.valence_bias) * self.valence_scale,
        )
    }
}

static TEXT: CategoryProfile = CategoryProfile {
    category: RecordCategory::Text,
    narratives: &[
        "El texto revela una experiencia introspectiva llena de matices emocionales",
        "Las palabras crean un paisaje mental de profunda contemplación",
        "La narrativa transporta a un estado de conciencia alterado",
        "Cada frase resuena con significados ocultos y qualia lingüísticos",
    ],
    mode: IntentionalMode::Reflection,
    directedness: "linguistic_analysis",
    confidence: &[
        (Modality::Visual, 0.2),
        (Modality::Auditory, 0.1),
        (Modality::Haptic, 0.05),
        (Modality::Affective, 0.7),
        (Modality::Proprioceptive, 0.3),
        (Modality::Digital, 0.9),
    ],
    valence_bias: 0.5,
    valence_scale: 1.5,
    spatial_horizon: "imaginal_space",
    lexical_anchors: &["palabra", "significado", "introspección", "conciencia"],
    contamination_strength: 0.8,
    qualia: &[("profundo", false, true), ("claro", true, false)],
};

static IMAGE: CategoryProfile = CategoryProfile {
    category: RecordCategory::Image,
    narratives: &[
        "La imagen revela una composición visual de extraordinaria belleza",
        "Los colores y formas crean una experiencia visual inmersiva",
        "La luz capturada evoca emociones profundas y qualia visuales",
        "Cada píxel contribuye a una sinfonía de percepción visual",
    ],
    mode: IntentionalMode::Perception,
    directedness: "visual_contemplation",
    confidence: &[
        (Modality::Visual, 0.95),
        (Modality::Auditory, 0.1),
        (Modality::Haptic, 0.2),
        (Modality::Affective, 0.6),
        (Modality::Proprioceptive, 0.3),
        (Modality::Digital, 0.8),
    ],
    valence_bias: 0.3,
    valence_scale: 1.2,
    spatial_horizon: "peripersonal_space",
    lexical_anchors: &["color", "forma", "luz", "composición"],
    contamination_strength: 0.6,
    qualia: &[("brillante", true, false), ("armonioso", false, true)],
};

static AUDIO: CategoryProfile = CategoryProfile {
    category: RecordCategory::Audio,
    narratives: &[
        "El sonido crea una atmósfera auditiva de extraordinaria riqueza",
        "Las ondas sonoras transportan a estados de conciencia profundos",
        "La melodía evoca qualia auditivos puros e inmediatos",
        "Cada nota resuena con significados emocionales y sensoriales",
    ],
    mode: IntentionalMode::Contemplation,
    directedness: "auditory_presence",
    confidence: &[
        (Modality::Visual, 0.1),
        (Modality::Auditory, 0.95),
        (Modality::Haptic, 0.3),
        (Modality::Affective, 0.7),
        (Modality::Proprioceptive, 0.4),
        (Modality::Digital, 0.6),
    ],
    valence_bias: 0.4,
    valence_scale: 1.8,
    spatial_horizon: "ambiental_space",
    lexical_anchors: &["sonido", "melodía", "ritmo", "armonía"],
    contamination_strength: 0.5,
    qualia: &[("suave", true, false), ("emocionante", false, true)],
};

static VIDEO: CategoryProfile = CategoryProfile {
    category: RecordCategory::Video,
    narratives: &[
        "La secuencia visual crea una narrativa temporal inmersiva",
        "El movimiento capturado evoca qualia cinéticos y temporales",
        "La sinfonía de imágenes y sonidos crea una experiencia multimodal",
        "Cada frame contribuye a una percepción temporal fluida",
    ],
    mode: IntentionalMode::Perception,
    directedness: "temporal_flow",
    confidence: &[
        (Modality::Visual, 0.8),
        (Modality::Auditory, 0.7),
        (Modality::Haptic, 0.2),
        (Modality::Affective, 0.6),
        (Modality::Proprioceptive, 0.5),
        (Modality::Digital, 0.9),
    ],
    valence_bias: 0.5,
    valence_scale: 1.6,
    spatial_horizon: "extrapersonal_space",
    lexical_anchors: &["movimiento", "secuencia", "tiempo", "flujo"],
    contamination_strength: 0.7,
    qualia: &[("dinámico", true, false), ("evocador", false, true)],
};

static GENERIC: CategoryProfile = CategoryProfile {
    category: RecordCategory::Generic,
    narratives: &["Experiencia digital de qualia inmediatos y puros"],
    mode: IntentionalMode::Perception,
    directedness: "digital_presence",
    confidence: &[
        (Modality::Visual, 0.4),
        (Modality::Auditory, 0.3),
        (Modality::Haptic, 0.2),
        (Modality::Affective, 0.5),
        (Modality::Proprioceptive, 0.3),
        (Modality::Digital, 0.9),
    ],
    valence_bias: 0.5,
    valence_scale: 2.0,
    spatial_horizon: "digital_space",
    lexical_anchors: &["digital", "experiencia", "qualia", "presencia"],
    contamination_strength: 0.4,
    qualia: &[("inmediato", true, false)],
};

/// Look up the profile for a category.
pub fn profile(category: RecordCategory) -> &'static CategoryProfile {
    match category {
        RecordCategory::Text => &TEXT,
        RecordCategory::Image => &IMAGE,
        RecordCategory::Audio => &AUDIO,
        RecordCategory::Video => &VIDEO,
        RecordCategory::Generic => &GENERIC,
    }
}
