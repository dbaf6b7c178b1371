//! Hand angles and proportions.

use std::f64::consts::TAU;

use chrono::Timelike;
use tokei_core::{HourHandMode, PolarSpec};

use crate::geometry::FaceGeometry;

/// One of the three clock hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// All hands, in paint order.
    pub const ALL: [Hand; 3] = [Hand::Second, Hand::Minute, Hand::Hour];

    /// Start and end of the hand as fractions of the dial radius.
    ///
    /// The negative start gives each hand a short tail past the center.
    pub fn extent(self) -> (f64, f64) {
        match self {
            Hand::Second => (-0.10, 0.95),
            Hand::Minute => (-0.05, 0.80),
            Hand::Hour => (-0.05, 0.70),
        }
    }

    /// Where this hand goes on `geometry` at `angle`.
    pub fn spec(self, geometry: &FaceGeometry, angle: f64) -> PolarSpec {
        let (inner, outer) = self.extent();
        PolarSpec::new(
            geometry.center,
            geometry.scaled(inner),
            geometry.scaled(outer),
            angle,
        )
    }
}

/// Angles of the three hands for one tick, in radians clockwise from 12.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    /// Compute the hand angles for `time`.
    pub fn at<T: Timelike>(time: &T, mode: HourHandMode) -> Self {
        let hour = f64::from(time.hour() % 12);
        let minute = f64::from(time.minute());
        let second = f64::from(time.second());

        let hour_position = match mode {
            HourHandMode::Smooth => hour + minute / 60.0,
            HourHandMode::Stepped => hour,
        };

        Self {
            hour: TAU * hour_position / 12.0,
            minute: TAU * minute / 60.0,
            second: TAU * second / 60.0,
        }
    }

    pub fn get(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}
