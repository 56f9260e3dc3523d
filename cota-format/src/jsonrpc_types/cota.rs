use super::hex_string;
use crate::error::CotaFormatError;
use crate::layout::View;
use crate::types::packed;

use ckb_jsonrpc_types::ScriptHashType;
use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct DefineCotaNFTId {
    pub smt_type: String,
    pub cota_id: String,
}

impl From<packed::DefineCotaNFTId<'_>> for DefineCotaNFTId {
    fn from(packed: packed::DefineCotaNFTId<'_>) -> Self {
        DefineCotaNFTId {
            smt_type: hex_string(packed.smt_type().raw_data()),
            cota_id: hex_string(packed.cota_id().raw_data()),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct DefineCotaNFTValue {
    pub total: u32,
    pub issued: u32,
    pub configure: u8,
}

impl From<packed::DefineCotaNFTValue<'_>> for DefineCotaNFTValue {
    fn from(packed: packed::DefineCotaNFTValue<'_>) -> Self {
        DefineCotaNFTValue {
            total: packed.total().unpack(),
            issued: packed.issued().unpack(),
            configure: packed.configure().value(),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct CotaNFTId {
    pub smt_type: String,
    pub cota_id: String,
    pub index: u32,
}

impl From<packed::CotaNFTId<'_>> for CotaNFTId {
    fn from(packed: packed::CotaNFTId<'_>) -> Self {
        CotaNFTId {
            smt_type: hex_string(packed.smt_type().raw_data()),
            cota_id: hex_string(packed.cota_id().raw_data()),
            index: packed.index().unpack(),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct CotaNFTInfo {
    pub configure: u8,
    pub state: u8,
    pub characteristic: String,
}

impl From<packed::CotaNFTInfo<'_>> for CotaNFTInfo {
    fn from(packed: packed::CotaNFTInfo<'_>) -> Self {
        CotaNFTInfo {
            configure: packed.configure().value(),
            state: packed.state().value(),
            characteristic: hex_string(packed.characteristic().raw_data()),
        }
    }
}

pub fn hash_type_from_byte(byte: u8) -> Result<ScriptHashType, CotaFormatError> {
    match byte {
        0 => Ok(ScriptHashType::Data),
        1 => Ok(ScriptHashType::Type),
        2 => Ok(ScriptHashType::Data1),
        other => Err(CotaFormatError::InvalidHashType(other)),
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct LockScript {
    pub code_hash: String,
    pub hash_type: ScriptHashType,
    pub args: String,
}

impl TryFrom<packed::Script<'_>> for LockScript {
    type Error = CotaFormatError;

    fn try_from(packed: packed::Script<'_>) -> Result<Self, Self::Error> {
        Ok(LockScript {
            code_hash: hex_string(packed.code_hash()?.raw_data()),
            hash_type: hash_type_from_byte(packed.hash_type()?.value())?,
            args: hex_string(packed.args()?.raw_data()),
        })
    }
}

impl TryFrom<packed::Bytes<'_>> for LockScript {
    type Error = CotaFormatError;

    /// `to_lock` fields carry a whole serialized script.
    fn try_from(to_lock: packed::Bytes<'_>) -> Result<Self, Self::Error> {
        let script = packed::Script::from_slice(to_lock.raw_data())?;
        LockScript::try_from(script)
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct WithdrawalCotaNFTValue {
    pub nft_info: CotaNFTInfo,
    pub to_lock: LockScript,
    pub out_point: String,
}

impl TryFrom<packed::WithdrawalCotaNFTValue<'_>> for WithdrawalCotaNFTValue {
    type Error = CotaFormatError;

    fn try_from(packed: packed::WithdrawalCotaNFTValue<'_>) -> Result<Self, Self::Error> {
        Ok(WithdrawalCotaNFTValue {
            nft_info: packed.nft_info()?.into(),
            to_lock: LockScript::try_from(packed.to_lock()?)?,
            out_point: hex_string(packed.out_point()?.raw_data()),
        })
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct WithdrawalCotaNFTKeyV1 {
    pub nft_id: CotaNFTId,
    pub out_point: String,
}

impl From<packed::WithdrawalCotaNFTKeyV1<'_>> for WithdrawalCotaNFTKeyV1 {
    fn from(packed: packed::WithdrawalCotaNFTKeyV1<'_>) -> Self {
        WithdrawalCotaNFTKeyV1 {
            nft_id: packed.nft_id().into(),
            out_point: hex_string(packed.out_point().raw_data()),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct WithdrawalCotaNFTValueV1 {
    pub nft_info: CotaNFTInfo,
    pub to_lock: LockScript,
}

impl TryFrom<packed::WithdrawalCotaNFTValueV1<'_>> for WithdrawalCotaNFTValueV1 {
    type Error = CotaFormatError;

    fn try_from(packed: packed::WithdrawalCotaNFTValueV1<'_>) -> Result<Self, Self::Error> {
        Ok(WithdrawalCotaNFTValueV1 {
            nft_info: packed.nft_info()?.into(),
            to_lock: LockScript::try_from(packed.to_lock()?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builder;

    use ckb_types::{bytes, core, packed as ckb_packed, prelude::*, H256};

    fn script_bytes(hash_type: u8) -> Vec<u8> {
        builder::table(&[vec![0x22; 32], vec![hash_type], builder::bytes(&[0x01, 0x02])])
    }

    #[test]
    fn test_hash_type_from_byte() {
        assert_eq!(hash_type_from_byte(0).unwrap(), ScriptHashType::Data);
        assert_eq!(hash_type_from_byte(1).unwrap(), ScriptHashType::Type);
        assert_eq!(hash_type_from_byte(2).unwrap(), ScriptHashType::Data1);
        for byte in 3..=u8::MAX {
            assert_eq!(
                hash_type_from_byte(byte),
                Err(CotaFormatError::InvalidHashType(byte))
            );
        }
    }

    #[test]
    fn test_hash_type_json_names() {
        let names = [0u8, 1, 2]
            .iter()
            .map(|byte| serde_json::to_value(hash_type_from_byte(*byte).unwrap()).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["data", "type", "data1"]);
    }

    #[test]
    fn test_lock_script_from_to_lock_bytes() {
        let script = ckb_packed::Script::new_builder()
            .code_hash(H256([0x22; 32]).pack())
            .hash_type(core::ScriptHashType::Type.into())
            .args(bytes::Bytes::from(vec![0x01, 0x02]).pack())
            .build();
        let to_lock = builder::bytes(script.as_slice());
        let lock = LockScript::try_from(packed::Bytes::from_slice(&to_lock).unwrap()).unwrap();
        assert_eq!(
            lock,
            LockScript {
                code_hash: format!("0x{}", "22".repeat(32)),
                hash_type: ScriptHashType::Type,
                args: "0x0102".to_owned(),
            }
        );
        assert_eq!(script.as_slice(), &script_bytes(1)[..]);
    }

    #[test]
    fn test_lock_script_invalid_hash_type() {
        let to_lock = builder::bytes(&script_bytes(3));
        let bytes = packed::Bytes::from_slice(&to_lock).unwrap();
        assert_eq!(
            LockScript::try_from(bytes),
            Err(CotaFormatError::InvalidHashType(3))
        );
    }

    #[test]
    fn test_lock_script_garbage() {
        let to_lock = builder::bytes(&[0xff; 12]);
        let bytes = packed::Bytes::from_slice(&to_lock).unwrap();
        assert!(matches!(
            LockScript::try_from(bytes),
            Err(CotaFormatError::SchemaBroken(_))
        ));
    }

    #[test]
    fn test_withdrawal_key_v1() {
        let data = builder::structure(&[
            vec![0x81, 0x01],
            vec![0xaa; 20],
            7u32.to_be_bytes().to_vec(),
            vec![0xbb; 24],
        ]);
        let packed = packed::WithdrawalCotaNFTKeyV1::from_slice(&data).unwrap();
        let key = WithdrawalCotaNFTKeyV1::from(packed);
        assert_eq!(key.nft_id.smt_type, "0x8101");
        assert_eq!(key.nft_id.cota_id, format!("0x{}", "aa".repeat(20)));
        assert_eq!(key.nft_id.index, 7);
        assert_eq!(key.out_point, format!("0x{}", "bb".repeat(24)));
    }
}
