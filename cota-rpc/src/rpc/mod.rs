mod r#impl;

use cota_format::jsonrpc_types::{GetCotaEntriesPayload, GetCotaEntriesResponse};

use jsonrpc_core::Result as RpcResult;
use jsonrpc_derive::rpc;

#[rpc(server)]
pub trait CotaRpc {
    #[rpc(name = "get_cota_entries")]
    fn get_cota_entries(&self, payload: GetCotaEntriesPayload)
        -> RpcResult<GetCotaEntriesResponse>;
}

/// Stateless: every call decodes its own witness.
#[derive(Clone, Copy, Debug, Default)]
pub struct CotaRpcImpl;

impl CotaRpcImpl {
    pub fn new() -> Self {
        CotaRpcImpl
    }
}
