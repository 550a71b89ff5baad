use serde::Serialize;

/// Age brackets with a recommended daily intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AgeGroup {
    Child, // 4-8
    Teen,  // 9-13
    #[default]
    Adult, // 14-64
    Senior, // 65+
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "Child (4-8)",
            AgeGroup::Teen => "Teen (9-13)",
            AgeGroup::Adult => "Adult (14-64)",
            AgeGroup::Senior => "Senior (65+)",
        }
    }

    /// Recommended daily goal in ml.
    ///
    /// Adult and Senior use the middle of the 2000-2500 and 1700-2000 ranges.
    pub fn default_goal_ml(&self) -> u32 {
        match self {
            AgeGroup::Child => 1200,
            AgeGroup::Teen => 1700,
            AgeGroup::Adult => 2200,
            AgeGroup::Senior => 1800,
        }
    }

    /// Accepts the short code (`adult`) or the full label (`Adult (14-64)`),
    /// case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        let needle = code.trim().to_lowercase();
        AgeGroup::ALL
            .into_iter()
            .find(|g| g.code() == needle || g.label().to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_codes_and_labels() {
        assert_eq!(AgeGroup::from_code("teen"), Some(AgeGroup::Teen));
        assert_eq!(AgeGroup::from_code("SENIOR"), Some(AgeGroup::Senior));
        assert_eq!(AgeGroup::from_code("Child (4-8)"), Some(AgeGroup::Child));
        assert_eq!(AgeGroup::from_code(" adult (14-64) "), Some(AgeGroup::Adult));
        assert_eq!(AgeGroup::from_code("toddler"), None);
    }
}
