pub mod error;
pub mod rpc;
