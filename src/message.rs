use serde::{Deserialize, Serialize, Serializer};

use crate::models::WorkoutKind;

/// Language of the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    #[default]
    English,
    Russian,
}

impl std::str::FromStr for MessageLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(MessageLocale::English),
            "ru" | "russian" => Ok(MessageLocale::Russian),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}

/// Summary of one finished session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    #[serde(serialize_with = "serialize_kind_name")]
    pub training_type: WorkoutKind,
    /// Hours
    pub duration: f64,
    /// Kilometres
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line, every number with three decimals
    pub fn get_message(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::English => format!(
                "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
                 Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            MessageLocale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.get_message(MessageLocale::English))
    }
}

fn serialize_kind_name<S>(kind: &WorkoutKind, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(kind.name())
}
