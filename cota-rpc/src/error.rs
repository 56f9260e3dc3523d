use cota_format::error::{CotaError, CotaFormatError};

use derive_more::Display;
use jsonrpc_core::{Error, ErrorCode};
use serde::{Deserialize, Serialize};

pub type InnerResult<T> = Result<T, CotaRpcError>;

#[derive(Debug, Display)]
pub struct CotaRpcError(pub Box<dyn CotaError + Send>);

impl From<CotaRpcError> for Error {
    fn from(err: CotaRpcError) -> Error {
        Error {
            code: ErrorCode::ServerError(err.0.err_code()),
            message: err.0.message(),
            data: None,
        }
    }
}

impl From<CotaFormatError> for CotaRpcError {
    fn from(err: CotaFormatError) -> Self {
        CotaRpcError(Box::new(err))
    }
}

impl From<RpcInputError> for CotaRpcError {
    fn from(err: RpcInputError) -> Self {
        CotaRpcError(Box::new(err))
    }
}

/// Rejected at the RPC boundary, before the witness reaches the parser.
#[derive(Serialize, Deserialize, Clone, Debug, Display, Hash, PartialEq, Eq)]
pub enum RpcInputError {
    #[display(fmt = "witness is not valid hex: {}", _0)]
    InvalidWitnessHex(String),
}

impl CotaError for RpcInputError {
    fn err_code(&self) -> i64 {
        match self {
            RpcInputError::InvalidWitnessHex(_) => -13100,
        }
    }

    fn message(&self) -> String {
        self.to_string()
    }
}
