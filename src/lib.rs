// Library interface for trainsum modules
// This allows integration tests and benches to access the core functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod models;
pub mod sensors;
pub mod training;

// Re-export commonly used types for convenience
pub use error::{InvalidInput, Result, TrainSumError};
pub use message::{InfoMessage, MessageLocale};
pub use models::WorkoutKind;
pub use sensors::{load_packages, read_package, sample_packages, SensorPackage};
pub use training::{Running, Session, SportsWalking, Swimming, Training};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use config::AppConfig;
