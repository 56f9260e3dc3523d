//! Reads the `input_type` of a witness and dispatches it on the CoTA action tag.

use crate::error::CotaFormatError;
use crate::jsonrpc_types::{CotaEntry, Define, Mint};
use crate::layout::View;
use crate::types::packed;

use std::convert::TryFrom;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActionType {
    Define = 1,
    Mint = 2,
    Withdraw = 3,
    Claim = 4,
    Update = 5,
    Transfer = 6,
    ClaimUpdate = 7,
    TransferUpdate = 8,
}

impl TryFrom<u8> for ActionType {
    type Error = CotaFormatError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(ActionType::Define),
            2 => Ok(ActionType::Mint),
            3 => Ok(ActionType::Withdraw),
            4 => Ok(ActionType::Claim),
            5 => Ok(ActionType::Update),
            6 => Ok(ActionType::Transfer),
            7 => Ok(ActionType::ClaimUpdate),
            8 => Ok(ActionType::TransferUpdate),
            other => Err(CotaFormatError::InvalidActionType(other)),
        }
    }
}

/// Mint schema version requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CotaVersion {
    V0,
    V1,
}

impl FromStr for CotaVersion {
    type Err = CotaFormatError;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        match version {
            "0" => Ok(CotaVersion::V0),
            "1" => Ok(CotaVersion::V1),
            other => Err(CotaFormatError::VersionNotSupported(other.to_owned())),
        }
    }
}

/// Returns the raw `input_type` payload, `None` when the witness has none.
pub fn read_input_type(witness: &[u8]) -> Result<Option<&[u8]>, CotaFormatError> {
    let input_type = packed::WitnessArgs::from_slice(witness)
        .and_then(|witness_args| witness_args.input_type())
        .map_err(|err| CotaFormatError::WitnessEnvelopeBroken(err.to_string()))?;
    Ok(input_type.map(|bytes| bytes.raw_data()))
}

/// Decodes the CoTA entry carried by a serialized `WitnessArgs`.
///
/// A witness without `input_type` is not an error and yields `Ok(None)`.
/// `version` is only consulted for mint entries.
pub fn parse_cota_entry(
    witness: &[u8],
    version: &str,
) -> Result<Option<CotaEntry>, CotaFormatError> {
    let input_type = match read_input_type(witness)? {
        Some(input_type) => input_type,
        None => {
            log::debug!("witness has no input type");
            return Ok(None);
        }
    };

    let (&tag, payload) = input_type
        .split_first()
        .ok_or(CotaFormatError::EmptyPayload)?;
    let entry = match ActionType::try_from(tag)? {
        ActionType::Define => CotaEntry::Define(parse_define(payload)?),
        ActionType::Mint => CotaEntry::Mint(parse_mint(payload, version.parse()?)?),
        action => return Err(CotaFormatError::ActionNotImplemented(action as u8)),
    };
    Ok(Some(entry))
}

pub fn parse_define(payload: &[u8]) -> Result<Define, CotaFormatError> {
    let entries = packed::DefineCotaNFTEntries::from_slice(payload)?;
    Define::try_from(entries)
}

pub fn parse_mint(payload: &[u8], version: CotaVersion) -> Result<Mint, CotaFormatError> {
    match version {
        CotaVersion::V0 => Mint::try_from(packed::MintCotaNFTEntries::from_slice(payload)?),
        CotaVersion::V1 => Mint::try_from(packed::MintCotaNFTV1Entries::from_slice(payload)?),
    }
}
