use derive_more::Display;
use molecule::error::VerificationError;
use serde::{Deserialize, Serialize};

use std::fmt::{Debug, Display};

pub trait CotaError: Debug + Display {
    fn err_code(&self) -> i64;

    fn message(&self) -> String;
}

#[derive(Serialize, Deserialize, Clone, Debug, Display, Hash, PartialEq, Eq)]
pub enum CotaFormatError {
    #[display(fmt = "witness envelope is broken: {}", _0)]
    WitnessEnvelopeBroken(String),

    #[display(fmt = "input type payload is empty")]
    EmptyPayload,

    #[display(fmt = "action type {} is not implemented", _0)]
    ActionNotImplemented(u8),

    #[display(fmt = "invalid action type {}", _0)]
    InvalidActionType(u8),

    #[display(fmt = "cota version {} is not supported", _0)]
    VersionNotSupported(String),

    #[display(fmt = "schema is broken: {}", _0)]
    SchemaBroken(String),

    #[display(fmt = "{} has {} keys but {} values", _0, _1, _2)]
    EntryCountMismatch(String, usize, usize),

    #[display(fmt = "invalid hash type {}", _0)]
    InvalidHashType(u8),

    #[display(fmt = "no define entries")]
    NoDefineEntries,
}

impl CotaError for CotaFormatError {
    fn err_code(&self) -> i64 {
        match self {
            CotaFormatError::WitnessEnvelopeBroken(_) => -13000,
            CotaFormatError::EmptyPayload => -13001,
            CotaFormatError::ActionNotImplemented(_) => -13002,
            CotaFormatError::InvalidActionType(_) => -13003,
            CotaFormatError::VersionNotSupported(_) => -13004,
            CotaFormatError::SchemaBroken(_) => -13005,
            CotaFormatError::EntryCountMismatch(_, _, _) => -13006,
            CotaFormatError::InvalidHashType(_) => -13007,
            CotaFormatError::NoDefineEntries => -13008,
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }
}

impl From<VerificationError> for CotaFormatError {
    fn from(err: VerificationError) -> Self {
        CotaFormatError::SchemaBroken(err.to_string())
    }
}
