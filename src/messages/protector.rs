use crate::{Ordinal, Record};

use super::Service;

/// Park location is never reported more precise than this, in meters.
pub const MINIMUM_PARK_LOCATION_ACCURACY: f32 = 150.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Record)]
pub struct Position {
    #[flatline(order = 0)]
    pub latitude: f64,
    #[flatline(order = 1)]
    pub longitude: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Record)]
pub struct CarLocation {
    #[flatline(order = 0)]
    pub position: Position,

    /// Meters.
    #[flatline(order = 1)]
    pub accuracy: f32,

    /// Charge level in `0.0..=1.0`.
    #[flatline(order = 2)]
    pub battery: f32,

    /// Unix time in milliseconds.
    #[flatline(order = 3)]
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Record)]
pub struct ParkLocation {
    #[flatline(order = 0)]
    pub position: Position,
    #[flatline(order = 1)]
    pub accuracy: f32,
}

impl ParkLocation {
    /// Parks at the current car location.
    /// Accuracy is widened to [`MINIMUM_PARK_LOCATION_ACCURACY`].
    pub fn from_car_location(car_location: &CarLocation) -> Self {
        ParkLocation {
            position: car_location.position,
            accuracy: car_location.accuracy.max(MINIMUM_PARK_LOCATION_ACCURACY),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Ordinal)]
pub enum StatusKind {
    #[default]
    ParkingDetected,
    ParkingUpdated,
    CarTheftDetected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Record)]
pub struct Status {
    #[flatline(order = 0)]
    pub status: StatusKind,
}

/// State reported by the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Record)]
pub struct Protector {
    #[flatline(order = 0)]
    pub car_location: Option<CarLocation>,
    #[flatline(order = 1)]
    pub park_location: Option<ParkLocation>,
    #[flatline(order = 2)]
    pub status: Option<Status>,
    #[flatline(order = 3)]
    pub service: Option<Service>,
}
