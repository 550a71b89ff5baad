use serde::Serialize;

/// Mascot expression, selected purely from the progress percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MascotState {
    Neutral,
    Smile,
    Wave,
    Celebrate,
}

impl MascotState {
    pub fn emoji(&self) -> &'static str {
        match self {
            MascotState::Neutral => "😐",
            MascotState::Smile => "😊",
            MascotState::Wave => "👋😄",
            MascotState::Celebrate => "🎉😄",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            MascotState::Neutral => "Mascot: Neutral (keep going!)",
            MascotState::Smile => "Mascot: Smiling (good progress!)",
            MascotState::Wave => "Mascot: Waving (almost there!)",
            MascotState::Celebrate => "Mascot: Celebrating (goal reached!)",
        }
    }
}
