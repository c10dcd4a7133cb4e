//! Formula sets for each workout kind.
//!
//! Every kind shares the step-based distance and the distance-over-time speed,
//! and brings its own calorie formula. Swimming also replaces the speed with
//! one derived from pool laps.
//!
//! Arithmetic is evaluated in the same order as the published formulas so the
//! three-decimal report is stable across implementations.

use crate::errors::{Result, WorkoutError};
use crate::models::WorkoutKind;
use crate::report::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Readings every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps for running and walking, strokes for swimming.
    pub action: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Session {
    /// Rejects a non-positive or non-finite duration, which every speed
    /// formula divides by.
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        if !(duration_hours.is_finite() && duration_hours > 0.0) {
            return Err(WorkoutError::invalid("duration", duration_hours));
        }
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}

/// Formula set for one workout kind.
pub trait Training {
    /// Distance covered by one step or stroke, in meters.
    const LEN_STEP_M: f64 = 0.65;

    fn kind(&self) -> WorkoutKind;

    fn session(&self) -> &Session;

    fn distance_km(&self) -> f64 {
        f64::from(self.session().action) * Self::LEN_STEP_M / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.session().duration_hours,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * s.weight_kg
            / M_IN_KM
            * s.duration_hours
            * MINUTES_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s, rounded to three places (1000 / 3600).
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    /// Height is a divisor in the calorie formula and must be positive.
    pub fn new(session: Session, height_cm: f64) -> Result<Self> {
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(WorkoutError::invalid("height", height_cm));
        }
        Ok(Self { session, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        let speed_msec = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * s.weight_kg
            + (speed_msec.powi(2) / (self.height_cm / Self::CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * s.weight_kg)
            * s.duration_hours
            * MINUTES_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_count: u32,
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(session: Session, pool_length_m: f64, pool_count: u32) -> Self {
        Self {
            session,
            pool_length_m,
            pool_count,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

impl Training for Swimming {
    const LEN_STEP_M: f64 = 1.38;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    // Speed comes from the laps swum, not from the stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_count) / M_IN_KM / self.session.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * s.weight_kg
            * s.duration_hours
    }
}

/// A resolved workout, ready to be reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(t) => t.kind(),
            Workout::SportsWalking(t) => t.kind(),
            Workout::Swimming(t) => t.kind(),
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Workout::Running(t) => t.session(),
            Workout::SportsWalking(t) => t.session(),
            Workout::Swimming(t) => t.session(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(t) => t.distance_km(),
            Workout::SportsWalking(t) => t.distance_km(),
            Workout::Swimming(t) => t.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(t) => t.mean_speed_kmh(),
            Workout::SportsWalking(t) => t.mean_speed_kmh(),
            Workout::Swimming(t) => t.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(t) => t.spent_calories(),
            Workout::SportsWalking(t) => t.spent_calories(),
            Workout::Swimming(t) => t.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Workout::Running(t) => t.show_training_info(),
            Workout::SportsWalking(t) => t.show_training_info(),
            Workout::Swimming(t) => t.show_training_info(),
        }
    }
}
