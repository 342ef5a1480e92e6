//! Payloads exchanged between the car tracker and the phone.
//!
//! The tracker reports [`Protector`] state,
//! the phone sends [`Watcher`] requests.
//! Each message travels as one line produced by [`encode`](crate::encode).

mod protector;
mod watcher;

pub use self::{
    protector::{
        CarLocation, ParkLocation, Position, Protector, Status, StatusKind,
        MINIMUM_PARK_LOCATION_ACCURACY,
    },
    watcher::{Call, CommandError, Park, ReceiverInfo, Refresh, Source, Watcher},
};

use crate::Record;

/// Service mode toggle.
/// Reported by the tracker and requested by the phone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Record)]
pub struct Service {
    #[flatline(order = 0)]
    pub value: bool,
}
