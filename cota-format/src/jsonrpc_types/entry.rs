use super::cota::{
    CotaNFTId, DefineCotaNFTId, DefineCotaNFTValue, WithdrawalCotaNFTKeyV1,
    WithdrawalCotaNFTValue, WithdrawalCotaNFTValueV1,
};
use super::{hex_string, sanitize_action};
use crate::error::CotaFormatError;
use crate::layout::{FixVec, FixedSize, View};
use crate::types::packed;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct GetCotaEntriesPayload {
    /// Hex encoded `WitnessArgs`, `0x` prefix optional.
    pub witness: String,
    pub version: String,
}

/// Serializes to `{}` when the witness carries no CoTA entry.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct GetCotaEntriesResponse {
    #[serde(flatten)]
    pub entry: Option<CotaEntry>,
}

impl From<Option<CotaEntry>> for GetCotaEntriesResponse {
    fn from(entry: Option<CotaEntry>) -> Self {
        GetCotaEntriesResponse { entry }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum CotaEntry {
    Define(Define),
    Mint(Mint),
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Define {
    pub define_keys: Vec<DefineCotaNFTId>,
    pub define_values: Vec<DefineCotaNFTValue>,
    pub proof: String,
    pub action: String,
}

impl TryFrom<packed::DefineCotaNFTEntries<'_>> for Define {
    type Error = CotaFormatError;

    fn try_from(entries: packed::DefineCotaNFTEntries<'_>) -> Result<Self, Self::Error> {
        let keys = entries.define_keys()?;
        if keys.is_empty() {
            return Err(CotaFormatError::NoDefineEntries);
        }
        let values = entries.define_values()?;
        if keys.len() != values.len() {
            return Err(CotaFormatError::EntryCountMismatch(
                "DefineCotaNFTEntries".to_owned(),
                keys.len(),
                values.len(),
            ));
        }

        Ok(Define {
            define_keys: convert_items(keys),
            define_values: convert_items(values),
            proof: hex_string(entries.proof()?.raw_data()),
            action: sanitize_action(entries.action()?.raw_data()),
        })
    }
}

/// Withdrawals of a mint, one variant per schema version.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MintWithdrawal {
    V0 {
        withdrawal_keys: Vec<CotaNFTId>,
        withdrawal_values: Vec<WithdrawalCotaNFTValue>,
    },
    V1 {
        withdrawal_keys: Vec<WithdrawalCotaNFTKeyV1>,
        withdrawal_values: Vec<WithdrawalCotaNFTValueV1>,
    },
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Mint {
    pub define_keys: Vec<DefineCotaNFTId>,
    pub define_old_values: Vec<DefineCotaNFTValue>,
    pub define_new_values: Vec<DefineCotaNFTValue>,
    #[serde(flatten)]
    pub withdrawal: MintWithdrawal,
    pub proof: String,
    pub action: String,
}

impl TryFrom<packed::MintCotaNFTEntries<'_>> for Mint {
    type Error = CotaFormatError;

    fn try_from(entries: packed::MintCotaNFTEntries<'_>) -> Result<Self, Self::Error> {
        assemble_mint(entries, |withdrawal_keys, withdrawal_values| {
            MintWithdrawal::V0 {
                withdrawal_keys,
                withdrawal_values,
            }
        })
    }
}

impl TryFrom<packed::MintCotaNFTV1Entries<'_>> for Mint {
    type Error = CotaFormatError;

    fn try_from(entries: packed::MintCotaNFTV1Entries<'_>) -> Result<Self, Self::Error> {
        assemble_mint(entries, |withdrawal_keys, withdrawal_values| {
            MintWithdrawal::V1 {
                withdrawal_keys,
                withdrawal_values,
            }
        })
    }
}

fn convert_items<'r, T, U>(vec: FixVec<'r, T>) -> Vec<U>
where
    U: From<T>,
{
    vec.into_items().into_iter().map(Into::into).collect()
}

fn assemble_mint<'r, K, V, KJ, VJ, F>(
    entries: packed::MintEntries<'r, K, V>,
    withdrawal: F,
) -> Result<Mint, CotaFormatError>
where
    K: View<'r> + FixedSize,
    V: View<'r>,
    KJ: From<K>,
    VJ: TryFrom<V, Error = CotaFormatError>,
    F: FnOnce(Vec<KJ>, Vec<VJ>) -> MintWithdrawal,
{
    let define_keys = convert_items(entries.define_keys()?);
    let define_old_values = convert_items(entries.define_old_values()?);
    let define_new_values = convert_items(entries.define_new_values()?);
    let withdrawal_keys = convert_items(entries.withdrawal_keys()?);
    let withdrawal_values = entries
        .withdrawal_values()?
        .into_items()
        .into_iter()
        .map(VJ::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Mint {
        define_keys,
        define_old_values,
        define_new_values,
        withdrawal: withdrawal(withdrawal_keys, withdrawal_values),
        proof: hex_string(entries.proof()?.raw_data()),
        action: sanitize_action(entries.action()?.raw_data()),
    })
}
