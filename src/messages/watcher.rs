use core::str::FromStr;

use alloc::string::String;

use crate::{Ordinal, Record};

use super::Service;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Record)]
pub struct Call {
    #[flatline(order = 0)]
    pub value: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Record)]
pub struct Refresh {
    #[flatline(order = 0)]
    pub value: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Record)]
pub struct Park {
    #[flatline(order = 0)]
    pub value: bool,
}

/// Channel the request came from and where to answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Ordinal)]
pub enum Source {
    #[default]
    Gcm,
    SmsHuman,
    SmsMachine,
    Service,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct ReceiverInfo {
    #[flatline(order = 0)]
    pub source: Source,
    #[flatline(order = 1)]
    pub phone_number: String,
}

/// Request sent by the phone.
#[derive(Clone, Debug, Default, PartialEq, Record)]
pub struct Watcher {
    #[flatline(order = 0)]
    pub call: Option<Call>,
    #[flatline(order = 1)]
    pub refresh: Option<Refresh>,
    #[flatline(order = 2)]
    pub park: Option<Park>,
    #[flatline(order = 3)]
    pub receiver: Option<ReceiverInfo>,
    #[flatline(order = 4)]
    pub service: Option<Service>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown watcher command")]
    UnknownCommand,
}

/// Parses commands typed by a human into an SMS.
impl FromStr for Watcher {
    type Err = CommandError;

    fn from_str(command: &str) -> Result<Self, CommandError> {
        let mut watcher = Watcher::default();
        match command {
            "location" => watcher.refresh = Some(Refresh { value: true }),
            "call" => watcher.call = Some(Call { value: true }),
            "park on" => watcher.park = Some(Park { value: true }),
            "park off" => watcher.park = Some(Park { value: false }),
            "service on" => watcher.service = Some(Service { value: true }),
            "service off" => watcher.service = Some(Service { value: false }),
            _ => return Err(CommandError::UnknownCommand),
        }
        Ok(watcher)
    }
}
