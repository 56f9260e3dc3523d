pub mod entries;
pub mod error;
pub mod jsonrpc_types;
pub mod layout;
pub mod types;

pub use entries::{parse_cota_entry, ActionType, CotaVersion};
pub use error::{CotaError, CotaFormatError};
