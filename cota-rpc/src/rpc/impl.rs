use super::{CotaRpc, CotaRpcImpl};
use crate::error::{InnerResult, RpcInputError};

use cota_format::error::CotaError;
use cota_format::jsonrpc_types::{GetCotaEntriesPayload, GetCotaEntriesResponse};
use cota_format::parse_cota_entry;

use jsonrpc_core::Result as RpcResult;

impl CotaRpc for CotaRpcImpl {
    fn get_cota_entries(
        &self,
        payload: GetCotaEntriesPayload,
    ) -> RpcResult<GetCotaEntriesResponse> {
        log::debug!("witness: {}, version: {}", payload.witness, payload.version);
        get_cota_entries(&payload).map_err(|err| {
            log::warn!("parse err({}): {}", err.0.err_code(), err);
            err.into()
        })
    }
}

fn get_cota_entries(payload: &GetCotaEntriesPayload) -> InnerResult<GetCotaEntriesResponse> {
    let witness = parse_witness(&payload.witness)?;
    let entry = parse_cota_entry(&witness, &payload.version)?;
    Ok(entry.into())
}

fn parse_witness(witness: &str) -> InnerResult<Vec<u8>> {
    let hex_str = witness.strip_prefix("0x").unwrap_or(witness);
    hex::decode(hex_str).map_err(|err| RpcInputError::InvalidWitnessHex(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_parse_witness() {
        assert_eq!(parse_witness("0x0aff").unwrap(), vec![0x0a, 0xff]);
        assert_eq!(parse_witness("0AFF").unwrap(), vec![0x0a, 0xff]);
        assert!(parse_witness("").unwrap().is_empty());
        assert!(parse_witness("0x0").is_err());
        assert!(parse_witness("0xzz").is_err());
        assert!(parse_witness("0x0x00").is_err());
    }

    proptest! {
        #[test]
        fn prop_hex_prefix_insensitive(raw in prop::collection::vec(any::<u8>(), 0..64)) {
            let hex_str = hex::encode(&raw);
            let plain = parse_witness(&hex_str).unwrap();
            let prefixed = parse_witness(&format!("0x{}", hex_str)).unwrap();
            prop_assert_eq!(&plain, &prefixed);
            prop_assert_eq!(&plain, &raw);
        }
    }
}
