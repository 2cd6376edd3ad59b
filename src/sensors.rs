//! Sensor package decoding
//!
//! A sensor unit reports a workout as a three-letter tag and a flat list of
//! numbers. [`read_package`] turns that into a typed [`Session`], checking the
//! reading count and values before any variant is built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument, warn};

use crate::error::{InvalidInput, Result};
use crate::models::WorkoutKind;
use crate::training::{Running, Session, SportsWalking, Swimming};

/// One package as delivered by the sensor unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn into_session(self) -> std::result::Result<Session, InvalidInput> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build a session from a workout tag and its positional readings
#[instrument(level = "debug", skip(data), fields(readings = data.len()))]
pub fn read_package(workout_type: &str, data: &[f64]) -> std::result::Result<Session, InvalidInput> {
    let result = workout_type
        .parse::<WorkoutKind>()
        .and_then(|kind| build_session(kind, data));

    match &result {
        Ok(session) => debug!(?session, "Sensor package decoded"),
        Err(err) => warn!(workout_type, error = %err, "Sensor package rejected"),
    }

    result
}

fn build_session(kind: WorkoutKind, data: &[f64]) -> std::result::Result<Session, InvalidInput> {
    let expected = kind.expected_readings();
    if data.len() != expected {
        return Err(InvalidInput::WrongArity {
            kind,
            expected,
            actual: data.len(),
        });
    }

    let readings = Readings::new(kind, data)?;
    let action = readings.count(0)?;
    let duration = readings.positive(1)?;
    let weight = readings.value(2);

    let session = match kind {
        WorkoutKind::Running => Running::new(action, duration, weight).into(),
        WorkoutKind::SportsWalking => {
            SportsWalking::new(action, duration, weight, readings.positive(3)?).into()
        }
        WorkoutKind::Swimming => Swimming::new(
            action,
            duration,
            weight,
            readings.value(3),
            readings.count(4)?,
        )
        .into(),
    };

    Ok(session)
}

/// Positional view over a package's readings with per-field checks
struct Readings<'a> {
    names: &'static [&'static str],
    data: &'a [f64],
}

impl<'a> Readings<'a> {
    fn new(kind: WorkoutKind, data: &'a [f64]) -> std::result::Result<Self, InvalidInput> {
        let names = kind.reading_names();
        for (&field, &value) in names.iter().zip(data) {
            if !value.is_finite() {
                return Err(InvalidInput::InvalidReading {
                    field,
                    value,
                    reason: "must be a finite number",
                });
            }
        }
        Ok(Self { names, data })
    }

    fn value(&self, index: usize) -> f64 {
        self.data[index]
    }

    fn positive(&self, index: usize) -> std::result::Result<f64, InvalidInput> {
        let value = self.data[index];
        if value <= 0.0 {
            return Err(self.invalid(index, "must be greater than zero"));
        }
        Ok(value)
    }

    fn count(&self, index: usize) -> std::result::Result<u32, InvalidInput> {
        let value = self.data[index];
        if value < 0.0 {
            return Err(self.invalid(index, "must not be negative"));
        }
        if value.fract() != 0.0 {
            return Err(self.invalid(index, "must be a whole number"));
        }
        if value > f64::from(u32::MAX) {
            return Err(self.invalid(index, "is out of range"));
        }
        Ok(value as u32)
    }

    fn invalid(&self, index: usize, reason: &'static str) -> InvalidInput {
        InvalidInput::InvalidReading {
            field: self.names[index],
            value: self.data[index],
            reason,
        }
    }
}

/// Demo packages reported by the sensor unit
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load a JSON array of packages from disk
pub fn load_packages<P: AsRef<Path>>(path: P) -> Result<Vec<SensorPackage>> {
    let content = fs::read_to_string(&path)?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&content)?;
    debug!(
        path = %path.as_ref().display(),
        count = packages.len(),
        "Loaded sensor packages"
    );
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Training;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_each_kind() {
        let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swimming, Session::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40)));

        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(running, Session::Running(Running::new(15000, 1.0, 75.0)));

        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            walking,
            Session::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
        );
    }

    #[test]
    fn test_unknown_tag() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, InvalidInput::UnknownWorkoutType { tag: "XYZ".to_string() });
    }

    #[test]
    fn test_wrong_arity() {
        let err = read_package("RUN", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::WrongArity {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2,
            }
        );

        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(err, InvalidInput::WrongArity { expected: 4, actual: 5, .. }));

        assert!(read_package("SWM", &[]).is_err());
    }

    #[test]
    fn test_unknown_tag_reported_before_arity() {
        let err = read_package("BIKE", &[]).unwrap_err();
        assert!(matches!(err, InvalidInput::UnknownWorkoutType { .. }));
    }

    #[test]
    fn test_count_fields_must_be_whole() {
        let err = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidReading { field: "action", .. }));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidReading { field: "count_pool", .. }));
    }

    #[test]
    fn test_duration_and_height_must_be_positive() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidReading { field: "duration", .. }));

        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidReading { field: "height", .. }));
    }

    #[test]
    fn test_non_finite_readings_rejected() {
        let err = read_package("RUN", &[15000.0, 1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidReading { field: "weight", .. }));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, f64::INFINITY, 40.0]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidReading { field: "length_pool", .. }));
    }

    #[test]
    fn test_sample_packages_decode() {
        let sessions: Vec<Session> = sample_packages()
            .into_iter()
            .map(|package| package.into_session().unwrap())
            .collect();

        let kinds: Vec<WorkoutKind> = sessions.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::SportsWalking]
        );
    }

    #[test]
    fn test_load_packages_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"workout_type": "RUN", "data": [15000, 1, 75]}},
                {{"workout_type": "WLK", "data": [9000, 1, 75, 180]}}]"#
        )
        .unwrap();

        let packages = load_packages(file.path()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_load_packages_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_packages(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::TrainSumError::Parse(_)));
    }
}
