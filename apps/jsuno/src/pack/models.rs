use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The three fields pasted into Suno. Missing fields deserialize as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPack {
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lyrics: String,
}

impl PromptPack {
    /// Response schema handed to the model for structured output.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "style": {"type": "STRING"},
                "title": {"type": "STRING"},
                "lyrics": {"type": "STRING"}
            },
            "required": ["style", "title", "lyrics"],
            "propertyOrdering": ["style", "title", "lyrics"]
        })
    }
}

/// A quick-fill button on the create tab.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static PRESETS: [Preset; 4] = [
    Preset {
        key: "anison",
        label: "アニソン",
        description: "勇気が湧く、明るい王道アニソン。サビで盛り上がる構成。",
    },
    Preset {
        key: "vocaloid",
        label: "ボカロ",
        description: "切ないメロディのボカロポップ。ピアノと電子音が特徴的。",
    },
    Preset {
        key: "city-pop",
        label: "シティポップ",
        description: "夜のドライブに合う、おしゃれで都会的なシティポップ。",
    },
    Preset {
        key: "j-rock",
        label: "J-ROCK",
        description: "魂を揺さぶる、激しいギターリフのJ-ROCK。",
    },
];

pub fn find_preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}
