mod basic;
mod cota;
mod script;
mod witness;

/// Borrowed views over the molecule encoding of CoTA witnesses.
pub mod packed {
    pub use super::basic::{Byte, Byte32, Characteristic, CotaId, OutPointSlice, Uint16, Uint32};
    pub use super::cota::{
        CotaNFTId, CotaNFTInfo, DefineCotaNFTEntries, DefineCotaNFTId, DefineCotaNFTKeyVec,
        DefineCotaNFTValue, DefineCotaNFTValueVec, MintCotaNFTEntries, MintCotaNFTV1Entries,
        MintEntries, WithdrawalCotaNFTKeyV1, WithdrawalCotaNFTValue, WithdrawalCotaNFTValueV1,
    };
    pub use super::script::Script;
    pub use super::witness::WitnessArgs;
    pub use crate::layout::Bytes;
}
