use serde::Serialize;

/// Narration mood. Unknown keywords resolve to `Calm`; the pipeline is
/// total over caller input by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Energetic,
    Inspirational,
}

impl Mood {
    pub fn from_keyword(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "energetic" => Self::Energetic,
            "inspirational" => Self::Inspirational,
            _ => Self::Calm,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Inspirational => "inspirational",
        }
    }

    pub fn profile(self) -> &'static MoodProfile {
        match self {
            Self::Calm => &CALM,
            Self::Energetic => &ENERGETIC,
            Self::Inspirational => &INSPIRATIONAL,
        }
    }
}

/// Tone/pacing/color/motion constants bundled per mood. Static data, no
/// per-call state.
#[derive(Debug, Serialize)]
pub struct MoodProfile {
    pub pacing: &'static str,
    pub audio: &'static str,
    pub color_palette: [&'static str; 3],
    pub motion: &'static str,
    pub lighting: &'static str,
    pub voice_tone: &'static str,
    pub hook_verb: &'static str,
}

static CALM: MoodProfile = MoodProfile {
    pacing: "slow and steady",
    audio: "soft ambient pads with a gentle piano motif",
    color_palette: ["#0F2E3D", "#2F6D7A", "#E8F1F2"],
    motion: "slow drifting camera moves and soft cross-dissolves",
    lighting: "diffuse, low-contrast lighting",
    voice_tone: "warm and reassuring",
    hook_verb: "Ease into",
};

static ENERGETIC: MoodProfile = MoodProfile {
    pacing: "fast and punchy",
    audio: "driving electronic beat with tight percussion",
    color_palette: ["#FF3D00", "#FFD600", "#1A1A1A"],
    motion: "quick cuts, whip pans, and snap zooms",
    lighting: "high-contrast, saturated lighting",
    voice_tone: "upbeat and direct",
    hook_verb: "Jump into",
};

static INSPIRATIONAL: MoodProfile = MoodProfile {
    pacing: "steadily building",
    audio: "swelling strings over a quiet piano pulse",
    color_palette: ["#F5D76E", "#B06AB3", "#101026"],
    motion: "slow push-ins building to sweeping reveals",
    lighting: "golden-hour backlighting",
    voice_tone: "uplifting and sincere",
    hook_verb: "Imagine",
};

/// Output frame shape. Unknown keywords resolve to `Wide` (16:9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn from_keyword(value: &str) -> Self {
        match value.trim() {
            "9:16" => Self::Vertical,
            "1:1" => Self::Square,
            _ => Self::Wide,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Wide => "16:9",
            Self::Vertical => "9:16",
            Self::Square => "1:1",
        }
    }

    pub fn profile(self) -> &'static AspectProfile {
        match self {
            Self::Wide => &WIDE,
            Self::Vertical => &VERTICAL,
            Self::Square => &SQUARE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AspectProfile {
    pub framing: &'static str,
    pub safe_zone: &'static str,
}

static WIDE: AspectProfile = AspectProfile {
    framing: "wide cinematic frame with room for lower-third graphics",
    safe_zone: "Keep titles inside the central 80% of the frame to survive player chrome and TV overscan.",
};

static VERTICAL: AspectProfile = AspectProfile {
    framing: "tight vertical frame centered on a single subject",
    safe_zone: "Keep text in the middle band; the top and bottom edges are covered by platform UI.",
};

static SQUARE: AspectProfile = AspectProfile {
    framing: "square frame with the subject held dead center",
    safe_zone: "Leave even margins on all four sides; feeds crop square posts unpredictably.",
};

/// Display label for a narration language code. Unknown codes resolve to
/// "English". Labels only; generated prose is never translated.
pub fn language_label(code: &str) -> &'static str {
    match code.trim().to_ascii_lowercase().as_str() {
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "pt" => "Portuguese",
        "it" => "Italian",
        "ja" => "Japanese",
        "zh" => "Chinese",
        _ => "English",
    }
}
