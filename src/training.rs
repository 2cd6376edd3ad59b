//! Training session model
//!
//! Each workout kind is its own type carrying only the readings it needs.
//! The shared arithmetic (distance from step count, mean speed, summary)
//! lives in provided methods of [`Training`]; calorie formulas are required
//! methods, so a kind without one does not compile.
//!
//! [`Session`] is the owned sum type handed out by the sensor factory.

use crate::message::InfoMessage;
use crate::models::WorkoutKind;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Common calculations for every workout kind
pub trait Training {
    /// Distance covered by one step or stroke, in metres
    const LEN_STEP: f64 = 0.65;

    fn kind(&self) -> WorkoutKind;

    /// Steps or strokes recorded by the sensor
    fn action(&self) -> u32;

    /// Session length in hours
    fn duration(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight(&self) -> f64;

    /// Distance in kilometres
    fn distance(&self) -> f64 {
        f64::from(self.action()) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Calories spent over the whole session
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Floor division on floats.
///
/// Rounds the quotient toward negative infinity and keeps the remainder's sign
/// consistent with the divisor, so `floor_div(-7.0, 2.0) == -4.0`. A zero
/// divisor yields the IEEE quotient (`inf` or `NaN`).
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return a / b;
    }

    let modulo = a % b;
    let mut div = (a - modulo) / b;
    if modulo != 0.0 && (b < 0.0) != (modulo < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

/// Running session
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    /// Calories per km/h of mean speed
    pub const CAL_MULT_AV_SPEED: f64 = 18.0;
    /// Shift applied to the speed term
    pub const SHIFT_AV_SPEED: f64 = 20.0;

    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        (Self::CAL_MULT_AV_SPEED * self.mean_speed() - Self::SHIFT_AV_SPEED) * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}

/// Sports walking session
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    /// Athlete height in centimetres
    pub height: f64,
}

impl SportsWalking {
    pub const MULT_WEIGHT: f64 = 0.035;
    pub const MULT_CAL: f64 = 0.029;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    // The speed term is banded: speed² is floor-divided by height, so it stays
    // zero until speed² reaches the athlete's height.
    fn spent_calories(&self) -> f64 {
        let speed_band = floor_div(self.mean_speed().powi(2), self.height);
        (Self::MULT_WEIGHT * self.weight + speed_band * Self::MULT_CAL * self.weight)
            * self.duration
            * MIN_IN_H
    }
}

/// Pool swimming session
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    /// Pool length in metres
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const MULT_CAL: f64 = 2.0;

    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    /// Stroke length
    const LEN_STEP: f64 = 1.38;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    /// Speed from pool geometry rather than stroke count
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::SPEED_SHIFT) * Self::MULT_CAL * self.weight
    }
}

/// A session of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! delegate {
    ($self:ident, $session:ident => $call:expr) => {
        match $self {
            Session::Running($session) => $call,
            Session::SportsWalking($session) => $call,
            Session::Swimming($session) => $call,
        }
    };
}

impl Training for Session {
    fn kind(&self) -> WorkoutKind {
        delegate!(self, s => s.kind())
    }

    fn action(&self) -> u32 {
        delegate!(self, s => s.action())
    }

    fn duration(&self) -> f64 {
        delegate!(self, s => s.duration())
    }

    fn weight(&self) -> f64 {
        delegate!(self, s => s.weight())
    }

    fn distance(&self) -> f64 {
        delegate!(self, s => s.distance())
    }

    fn mean_speed(&self) -> f64 {
        delegate!(self, s => s.mean_speed())
    }

    fn spent_calories(&self) -> f64 {
        delegate!(self, s => s.spent_calories())
    }
}

impl From<Running> for Session {
    fn from(training: Running) -> Self {
        Session::Running(training)
    }
}

impl From<SportsWalking> for Session {
    fn from(training: SportsWalking) -> Self {
        Session::SportsWalking(training)
    }
}

impl From<Swimming> for Session {
    fn from(training: Swimming) -> Self {
        Session::Swimming(training)
    }
}
