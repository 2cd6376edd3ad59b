use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Workout kinds a sensor package can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter tag sent by the sensor unit
    pub fn tag(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label used in the summary message
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional field names of the readings, in sensor order
    pub fn reading_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    pub fn expected_readings(&self) -> usize {
        self.reading_names().len()
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for WorkoutKind {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| InvalidInput::UnknownWorkoutType { tag: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parsing() {
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!("WLK".parse::<WorkoutKind>().unwrap(), WorkoutKind::SportsWalking);
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let err = "run".parse::<WorkoutKind>().unwrap_err();
        assert_eq!(err, InvalidInput::UnknownWorkoutType { tag: "run".to_string() });
        assert!("".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_expected_readings() {
        assert_eq!(WorkoutKind::Running.expected_readings(), 3);
        assert_eq!(WorkoutKind::SportsWalking.expected_readings(), 4);
        assert_eq!(WorkoutKind::Swimming.expected_readings(), 5);
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&WorkoutKind::SportsWalking).unwrap();
        assert_eq!(json, "\"WLK\"");
        let kind: WorkoutKind = serde_json::from_str("\"SWM\"").unwrap();
        assert_eq!(kind, WorkoutKind::Swimming);
        assert_eq!(kind.to_string(), "Swimming");
    }
}
